//! Cart and Plan Feedback
//!
//! Confirmation messages for add-to-cart and plan selection. Cart contents are
//! not kept.

pub const ADDED_LABEL: &str = "✔ Added";
pub const ADD_LABEL: &str = "Add to cart";

pub fn added_message(name: &str, price: &str) -> String {
    format!("{} added to cart ({})", name, price)
}

pub fn plan_message(plan: &str, price: &str) -> String {
    format!("{} selected ({})", plan, price)
}

/// Subscription plan shown below the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    pub perks: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: 1,
        name: "Starter",
        price: "$89/week",
        perks: &["5 meals a week", "Free delivery"],
    },
    Plan {
        id: 2,
        name: "Balanced",
        price: "$149/week",
        perks: &["10 meals a week", "Free delivery", "Nutrition coaching"],
    },
    Plan {
        id: 3,
        name: "Performance",
        price: "$199/week",
        perks: &["14 meals a week", "Priority delivery", "Macro tracking"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(added_message("Bowl A", "$9"), "Bowl A added to cart ($9)");
        assert_eq!(plan_message("Starter", "$89/week"), "Starter selected ($89/week)");
    }

    #[test]
    fn test_plan_ids_unique() {
        for (i, plan) in PLANS.iter().enumerate() {
            assert!(PLANS[i + 1..].iter().all(|p| p.id != plan.id));
        }
    }
}
