use serde::{Deserialize, Serialize};

/// Pre-aggregated analytics snapshot served by `GET /api/v1/analytics/dashboard`.
///
/// The client renders these numbers verbatim; nothing here is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardModel {
    pub sales: SalesStats,
    pub subscriptions: SubscriptionStats,
    pub total_products: u64,
    pub low_stock_products: u64,
    #[serde(default)]
    pub top_product: Option<TopProduct>,
    pub today_summary: TodaySummary,
    #[serde(default)]
    pub monthly_sales: Vec<MonthlySales>,
    #[serde(default)]
    pub subscriber_growth: Vec<SubscriberGrowth>,
    #[serde(default)]
    pub category_sales: Vec<CategorySales>,
}

impl DashboardModel {
    /// The first `limit` best sellers, in backend order.
    pub fn top_selling(&self, limit: usize) -> &[ProductStats] {
        let products = &self.sales.top_selling_products;
        &products[..limit.min(products.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesStats {
    pub total_sales: f64,
    pub total_orders: u64,
    #[serde(default)]
    pub total_products_sold: u64,
    #[serde(default)]
    pub average_order_value: f64,
    #[serde(default)]
    pub top_selling_products: Vec<ProductStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    #[serde(default)]
    pub product_id: Option<u64>,
    pub name: String,
    pub total_sold: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStats {
    pub total_subscriptions: u64,
    pub active_subscriptions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub total_sold: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub total_sales: f64,
    pub total_orders: u64,
    pub total_products_sold: u64,
    pub new_subscriptions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberGrowth {
    pub month: String,
    pub new_subscribers: u64,
    pub total_active: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub total_sales: f64,
    pub percentage: f64,
}
