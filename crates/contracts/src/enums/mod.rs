pub mod payment_status;

pub use payment_status::PaymentStatus;
