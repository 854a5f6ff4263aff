use types::DashboardModel;

pub fn dashboard_json() -> serde_json::Value {
    serde_json::json!({
        "sales": {
            "total_sales": 125000.5,
            "total_orders": 842,
            "top_selling_products": [
                { "name": "Whey Gold", "total_sold": 320 },
                { "name": "Creatina Pura", "total_sold": 280 },
                { "name": "BCAA", "total_sold": 150 },
                { "name": "Pre-Entreno", "total_sold": 120 },
                { "name": "Omega 3", "total_sold": 90 },
                { "name": "Multivitamínico", "total_sold": 60 },
                { "name": "Glutamina", "total_sold": 30 }
            ]
        },
        "subscriptions": { "total_subscriptions": 120, "active_subscriptions": 95 },
        "total_products": 64,
        "low_stock_products": 3,
        "top_product": {
            "name": "Whey Gold",
            "brand": "Optimum",
            "category": "Protein",
            "image_url": "https://cdn.befit.com/whey.png",
            "total_sold": 320,
            "total_revenue": 16000.0
        },
        "today_summary": {
            "total_sales": 1250.5,
            "total_orders": 9,
            "total_products_sold": 14,
            "new_subscriptions": 2
        },
        "monthly_sales": [
            { "month": "Ene", "sales": 10000.0 },
            { "month": "Feb", "sales": 12500.0 },
            { "month": "Mar", "sales": 9000.0 }
        ],
        "subscriber_growth": [
            { "month": "Ene", "new_subscribers": 10, "total_active": 80 },
            { "month": "Feb", "new_subscribers": 15, "total_active": 95 }
        ],
        "category_sales": [
            { "category": "Protein", "total_sales": 500.0, "percentage": 50.0 },
            { "category": "Creatine", "total_sales": 500.0, "percentage": 50.0 }
        ]
    })
}

pub fn dashboard_model() -> DashboardModel {
    serde_json::from_value(dashboard_json()).unwrap()
}
