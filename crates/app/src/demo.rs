//! Console demo: the sample member and order flows, rendered as text.

use orderdesk_core::{Entity, MemberId};
use orderdesk_members::{Grade, Member};
use orderdesk_orders::{Order, OrderResult};

use crate::config::AppConfig;

/// Join a VIP member and read it back through the registry.
pub fn member_flow(config: &AppConfig) -> String {
    let registry = config.member_registry();
    let member = Member::new(1, "memberA", Grade::Vip);
    registry.register(member.clone());

    let found = match registry.find(member.id()) {
        Some(found) => format!("found member: {}\ngrade: {}\n", found.name(), found.grade()),
        None => "found member: <none>\n".to_string(),
    };

    format!("new member: {}\n{found}", member.name())
}

/// Price one order each for a VIP and a BASIC member.
pub fn order_flow(config: &AppConfig) -> OrderResult<String> {
    let registry = config.member_registry();
    let pricer = config.order_pricer();

    let vip = Member::new(1, "memberA", Grade::Vip);
    registry.register(vip.clone());
    let vip_order = pricer.create_order(MemberId::new(1), "itemA", 10_000)?;

    let basic = Member::new(2, "memberB", Grade::Basic);
    registry.register(basic.clone());
    let basic_order = pricer.create_order(MemberId::new(2), "itemC", 10_000)?;

    let mut out = String::new();
    out.push_str("order result:\n");
    out.push_str(&render_order(&vip, &vip_order));
    out.push_str("=====================================\n");
    out.push_str("BASIC member order:\n");
    out.push_str(&render_order(&basic, &basic_order));
    Ok(out)
}

pub fn render_order(member: &Member, order: &Order) -> String {
    format!(
        "member: {} ({})\nitem: {}\nitem price: {}\ndiscount: {}\nfinal price: {}\n",
        member.name(),
        member.grade(),
        order.item_name(),
        order.item_price(),
        order.discount_price(),
        order.final_price()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_flow_reports_found_member() {
        let out = member_flow(&AppConfig::new());

        assert_eq!(out, "new member: memberA\nfound member: memberA\ngrade: VIP\n");
    }

    #[test]
    fn order_flow_prices_vip_and_basic() {
        let out = order_flow(&AppConfig::new()).unwrap();

        assert!(out.contains("member: memberA (VIP)\n"));
        assert!(out.contains("discount: 1000\nfinal price: 9000\n"));
        assert!(out.contains("member: memberB (BASIC)\n"));
        assert!(out.contains("discount: 0\nfinal price: 10000\n"));
    }

    #[test]
    fn render_order_lists_each_line() {
        let member = Member::new(1, "memberA", Grade::Vip);
        let order = Order::new(MemberId::new(1), "itemA", 10_000, 1000);

        assert_eq!(
            render_order(&member, &order),
            "member: memberA (VIP)\nitem: itemA\nitem price: 10000\ndiscount: 1000\nfinal price: 9000\n"
        );
    }
}
