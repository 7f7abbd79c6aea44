//! Outbound executions feed: `ts,cusip,orderId,MARKET,side,price,visibleQty,hiddenQty`,
//! side rendered as BUY/SELL from BID/OFFER (§6).

use super::clock::now_ms;
use backoffice_instruments::TradeSide;
use backoffice_marketdata::ExecutionOrder;

pub fn format(order: &ExecutionOrder) -> String {
    let side = TradeSide::from(order.side);
    format!(
        "{},{},{},MARKET,{},{},{},{}",
        now_ms(),
        order.product_id,
        order.order_id,
        side,
        order.price,
        order.visible_quantity,
        order.hidden_quantity,
    )
}
