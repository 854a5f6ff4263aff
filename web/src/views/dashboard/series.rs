//! Chart inputs derived from the snapshot. Values pass through untouched;
//! the only reshaping is capping the best-seller list.

use types::DashboardModel;
use ui::{Datum, Slice, charts::palette_color};

pub const TOP_SELLING_LIMIT: usize = 5;

pub fn monthly_sales(model: &DashboardModel) -> Vec<Datum> {
    model
        .monthly_sales
        .iter()
        .map(|m| Datum::new(&m.month, m.sales))
        .collect()
}

pub fn new_subscribers(model: &DashboardModel) -> Vec<Datum> {
    model
        .subscriber_growth
        .iter()
        .map(|g| Datum::new(&g.month, g.new_subscribers as f64))
        .collect()
}

pub fn active_subscribers(model: &DashboardModel) -> Vec<Datum> {
    model
        .subscriber_growth
        .iter()
        .map(|g| Datum::new(&g.month, g.total_active as f64))
        .collect()
}

pub fn top_products(model: &DashboardModel) -> Vec<Datum> {
    model
        .top_selling(TOP_SELLING_LIMIT)
        .iter()
        .map(|p| Datum::new(&p.name, p.total_sold as f64))
        .collect()
}

/// Sized by sales, labelled with the backend's percentage.
pub fn category_slices(model: &DashboardModel) -> Vec<Slice> {
    model
        .category_sales
        .iter()
        .enumerate()
        .map(|(i, c)| Slice {
            label: format!("{}: {}%", c.category, c.percentage),
            value: c.total_sales,
            color: palette_color(i),
        })
        .collect()
}
