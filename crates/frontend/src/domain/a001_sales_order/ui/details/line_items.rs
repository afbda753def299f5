use super::view_model::SalesOrderDetailsViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_sales_order::catalog::{self, CatalogKind};
use contracts::domain::a001_sales_order::line_items::shows_group_heading;
use contracts::domain::a001_sales_order::{LineItemAction, LineItemField, LineItemId, Product};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Line items of the order: header row, one row per item, or the empty
/// cart card when nothing is left.
#[component]
pub fn LineItemsCard(vm: SalesOrderDetailsViewModel) -> impl IntoView {
    let is_empty = move || vm.read(|data| data.products.is_empty());

    // Heading flags are derived from the current order on every change.
    let rows = move || {
        let items = vm.products();
        (0..items.len())
            .map(|index| (items[index].id, shows_group_heading(&items, index)))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="cart">
            <div class="cart__header">
                <p class="cart__col cart__col--quality">"quality:"</p>
                <p class="cart__col cart__col--size">"size"</p>
                <p class="cart__col cart__col--pcs">"pcs"</p>
                <p class="cart__col cart__col--actions">
                    <Show when=move || !is_empty()>
                        <a
                            class="cart__delete-all"
                            title="Delete all"
                            on:click=move |_| vm.dispatch_line_item(LineItemAction::ClearAll)
                        >
                            {icon("trash")}
                        </a>
                    </Show>
                </p>
            </div>

            <Show when=move || !is_empty() fallback=|| view! { <EmptyCart /> }>
                <div class="cart__rows">
                    <For
                        each=rows
                        key=|row| *row
                        children=move |(id, show_heading)| view! {
                            <LineItemRow vm=vm id=id show_heading=show_heading />
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="cart__empty">
            <h3 class="cart__empty-title">"Your Cart is Empty"</h3>
            <div class="cart__empty-icon">{icon("cart")}</div>
            <p class="cart__empty-hint">"Please visit the Shop."</p>
        </div>
    }
}

#[component]
fn LineItemRow(vm: SalesOrderDetailsViewModel, id: LineItemId, show_heading: bool) -> impl IntoView {
    let product = Memo::new(move |_| vm.product(id));
    let text = move |f: fn(&Product) -> String| {
        Signal::derive(move || product.get().as_ref().map(f).unwrap_or_default())
    };
    let edit = move |field: LineItemField| {
        Callback::new(move |value: String| {
            vm.dispatch_line_item(LineItemAction::UpdateField { id, field, value })
        })
    };
    let row_id = id.as_string();

    view! {
        <div class="line-item" id=format!("line-item-{}", row_id)>
            {show_heading.then(|| view! {
                <h2 class="line-item__group">{text(|p| p.name.clone())}</h2>
            })}

            <div class="line-item__grid">
                <div class="line-item__product">
                    <p class="line-item__sub-name">{text(|p| p.sub_name.clone())}</p>
                    <div class="line-item__image">
                        {move || product.get().and_then(|p| {
                            let alt = p.name.clone();
                            p.image_src.map(|src| view! { <img src=src alt=alt /> })
                        })}
                    </div>
                    <a class="line-item__add">{icon("plus")}</a>
                </div>

                <div class="line-item__config">
                    <Select
                        value=text(|p| p.size.value.clone())
                        options=catalog::options(CatalogKind::Size).to_vec()
                        placeholder="Please Select the Size"
                        on_change=edit(LineItemField::Size)
                    />
                    <div class="line-item__config-row">
                        <Select
                            value=text(|p| p.standard.value.clone())
                            options=catalog::options(CatalogKind::Standard).to_vec()
                            placeholder="Standard"
                            on_change=edit(LineItemField::Standard)
                        />
                        <Select
                            value=text(|p| p.pre_post.value.clone())
                            options=catalog::options(CatalogKind::PrePost).to_vec()
                            placeholder="pre"
                            on_change=edit(LineItemField::PrePost)
                        />
                    </div>
                    <div class="line-item__config-row">
                        <Input
                            value=text(|p| p.quality.clone())
                            placeholder="quality"
                            on_input=edit(LineItemField::Quality)
                        />
                        <Input
                            value=text(|p| p.quantity.to_string())
                            input_type="number"
                            placeholder="20"
                            class="line-item__quantity"
                            on_input=edit(LineItemField::Quantity)
                        />
                    </div>
                </div>

                <div class="line-item__rate">
                    <Input
                        value=text(|p| p.rate.to_string())
                        input_type="number"
                        on_input=edit(LineItemField::Rate)
                    />
                    <p class="line-item__price">"@" {text(|p| p.price.to_string())}</p>
                </div>

                <div class="line-item__actions">
                    <a
                        class="line-item__delete"
                        title="Delete"
                        on:click=move |_| vm.dispatch_line_item(LineItemAction::Delete { id })
                    >
                        {icon("trash")}
                    </a>
                </div>
            </div>
        </div>
    }
}
