//! Dashboard metrics: order aggregates and return-on-ad-spend math.
//! Pure computation over repo aggregates and the user's cost settings.

use {
    crate::infra::postgres::{cost_settings_repo::CostSettings, metrics_repo::OrderTotals},
    serde::Serialize,
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderMetrics {
    pub total_orders: i64,
    pub total_revenue: f64,
    pub average_order_value: f64,
    pub paid_orders: i64,
    pub pending_orders: i64,
    pub cancelled_orders: i64,
    pub conversion_rate: f64,
    pub paid_revenue: f64,
}

impl From<OrderTotals> for OrderMetrics {
    fn from(t: OrderTotals) -> Self {
        let average_order_value = if t.total_orders > 0 {
            t.total_revenue / t.total_orders as f64
        } else {
            0.0
        };
        let conversion_rate = if t.total_orders > 0 {
            t.paid_orders as f64 / t.total_orders as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_orders: t.total_orders,
            total_revenue: t.total_revenue,
            average_order_value,
            paid_orders: t.paid_orders,
            pending_orders: t.pending_orders,
            cancelled_orders: t.cancelled_orders,
            conversion_rate,
            paid_revenue: t.paid_revenue,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostBreakdown {
    pub advertising: f64,
    pub checkout: f64,
    pub gateway: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoiMetrics {
    pub total_costs: f64,
    pub roas: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub cost_breakdown: CostBreakdown,
}

/// The slice of cost settings the ROI formula actually needs. Defaults to
/// all-zero for users who never saved settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostRates {
    pub advertising_cost: f64,
    pub checkout_fee_percentage: f64,
    pub pix_gateway_fee_percentage: f64,
}

impl From<&CostSettings> for CostRates {
    fn from(s: &CostSettings) -> Self {
        Self {
            advertising_cost: s.advertising_cost,
            checkout_fee_percentage: s.checkout_fee_percentage,
            pix_gateway_fee_percentage: s.pix_gateway_fee_percentage,
        }
    }
}

/// Checkout fees apply to all revenue; gateway fees only to what was
/// actually paid (simplified to the PIX rate, since a per-method
/// breakdown would need fees joined per order).
pub fn roi_metrics(metrics: &OrderMetrics, rates: &CostRates) -> RoiMetrics {
    let advertising = rates.advertising_cost;
    let checkout = metrics.total_revenue * rates.checkout_fee_percentage / 100.0;
    let gateway = metrics.paid_revenue * rates.pix_gateway_fee_percentage / 100.0;
    let total_costs = advertising + checkout + gateway;

    let profit = metrics.paid_revenue - total_costs;
    let roas = if total_costs > 0.0 {
        metrics.paid_revenue / total_costs * 100.0
    } else {
        0.0
    };
    let profit_margin = if metrics.paid_revenue > 0.0 {
        profit / metrics.paid_revenue * 100.0
    } else {
        0.0
    };

    RoiMetrics {
        total_costs,
        roas,
        profit,
        profit_margin,
        cost_breakdown: CostBreakdown {
            advertising,
            checkout,
            gateway,
            total: total_costs,
        },
    }
}
