use std::collections::HashMap;

use uuid::Uuid;

use crate::modules::order::application::domain::{Order, OrderUser, OrderView};
use crate::modules::order::application::ports::outgoing::{ProductCatalog, ProductCatalogError};
use crate::modules::product::application::domain::Product;

pub(crate) type ProductIndex = HashMap<Uuid, Product>;

/// Looks up every distinct id in one catalog round-trip.
pub(crate) async fn index_products<I>(
    catalog: &dyn ProductCatalog,
    product_ids: I,
) -> Result<ProductIndex, ProductCatalogError>
where
    I: IntoIterator<Item = Uuid>,
{
    let mut ids: Vec<Uuid> = product_ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();

    if ids.is_empty() {
        return Ok(ProductIndex::new());
    }

    let products = catalog.find_products(&ids).await?;

    Ok(products.into_iter().map(|p| (p.id, p)).collect())
}

pub(crate) fn to_view(order: Order, user: OrderUser, products: &ProductIndex) -> OrderView {
    OrderView::build(order, user, |id| products.get(id).cloned())
}

pub(crate) fn to_owner_id_view(order: Order, products: &ProductIndex) -> OrderView {
    let user = OrderUser::Id(order.user_id);
    to_view(order, user, products)
}
