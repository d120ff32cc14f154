//! Line-item pricing, ported from the reference kit's `SetPricing`: a sales
//! variant (wholesale/list/discount/tax/shipping build-up) and a returns
//! variant (refund split across cash/charge/store-credit plus a fee and a
//! net-loss figure), both built from the same wholesale/list/quantity inputs.

use crate::random::{random_decimal, uniform_int, RandomStream};
use crate::types::decimal::Decimal;

/// Bounds the sales-variant draw is constrained to, mirroring the reference
/// kit's `PricingLimits` (markup over wholesale cost, coupon threshold, ...).
#[derive(Debug, Clone, Copy)]
pub struct PricingLimits {
    pub min_markup: f64,
    pub max_markup: f64,
    pub min_discount: f64,
    pub max_discount: f64,
    pub coupon_probability_pct: i64,
}

impl Default for PricingLimits {
    fn default() -> Self {
        PricingLimits {
            min_markup: 0.1,
            max_markup: 2.0,
            min_discount: 0.0,
            max_discount: 0.3,
            coupon_probability_pct: 20,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pricing {
    pub quantity: i64,
    pub wholesale_cost: Decimal,
    pub list_price: Decimal,
    pub sales_price: Decimal,
    pub ext_discount_amt: Decimal,
    pub ext_sales_price: Decimal,
    pub ext_wholesale_cost: Decimal,
    pub ext_list_price: Decimal,
    pub ext_tax: Decimal,
    pub coupon_amt: Decimal,
    pub ext_ship_cost: Decimal,
    pub net_paid: Decimal,
    pub net_paid_inc_tax: Decimal,
    pub net_paid_inc_ship: Decimal,
    pub net_paid_inc_ship_tax: Decimal,
    pub net_profit: Decimal,
}

/// Sets the sales-side pricing fields for a line item drawn with
/// `quantity` units at `wholesale_cost`.
pub fn set_pricing(
    quantity: i64,
    wholesale_cost: Decimal,
    limits: PricingLimits,
    stream: &mut RandomStream,
) -> Pricing {
    let markup = random_decimal(limits.min_markup, limits.max_markup, 2, stream);
    let list_price = wholesale_cost.add(&wholesale_cost.mul(&markup));

    let discount_pct = random_decimal(limits.min_discount, limits.max_discount, 2, stream);
    let sales_price = list_price.sub(&list_price.mul(&discount_pct));

    let coupon_roll = uniform_int(1, 100, stream);
    let coupon_amt = if coupon_roll <= limits.coupon_probability_pct {
        list_price.sub(&sales_price).mul(&Decimal::from_int(quantity))
    } else {
        Decimal::ZERO
    };

    let tax_pct = random_decimal(0.0, 0.09, 2, stream);
    let ship_cost_each = random_decimal(0.0, 0.5, 2, stream);

    let quantity_decimal = Decimal::from_int(quantity);
    let ext_sales_price = sales_price.mul(&quantity_decimal);
    let ext_list_price = list_price.mul(&quantity_decimal);
    let ext_wholesale_cost = wholesale_cost.mul(&quantity_decimal);
    let ext_discount_amt = list_price.sub(&sales_price).mul(&quantity_decimal);
    let ext_ship_cost = ship_cost_each.mul(&quantity_decimal);
    let ext_tax = ext_sales_price.mul(&tax_pct);

    let net_paid = ext_sales_price.sub(&coupon_amt);
    let net_paid_inc_tax = net_paid.add(&ext_tax);
    let net_paid_inc_ship = net_paid.add(&ext_ship_cost);
    let net_paid_inc_ship_tax = net_paid_inc_ship.add(&ext_tax);
    let net_profit = net_paid.sub(&ext_wholesale_cost);

    Pricing {
        quantity,
        wholesale_cost,
        list_price,
        sales_price,
        ext_discount_amt,
        ext_sales_price,
        ext_wholesale_cost,
        ext_list_price,
        ext_tax,
        coupon_amt,
        ext_ship_cost,
        net_paid,
        net_paid_inc_tax,
        net_paid_inc_ship,
        net_paid_inc_ship_tax,
        net_profit,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReturnPricing {
    pub return_quantity: i64,
    pub return_amt: Decimal,
    pub return_tax: Decimal,
    pub return_amt_inc_tax: Decimal,
    pub return_ship_cost: Decimal,
    pub refunded_cash: Decimal,
    pub reversed_charge: Decimal,
    pub store_credit: Decimal,
    pub fee: Decimal,
    pub net_loss: Decimal,
}

/// Sets the returns-side fields for a partial return of `return_quantity`
/// units out of an originally-sold `sale`, splitting the refund across cash,
/// reversed charge and store credit, and charging a restocking fee.
pub fn set_return_pricing(
    sale: &Pricing,
    return_quantity: i64,
    stream: &mut RandomStream,
) -> ReturnPricing {
    let fraction = return_quantity as f64 / sale.quantity.max(1) as f64;
    let scale = Decimal::from_str(&format!("{:.2}", fraction));

    let return_amt = sale.ext_sales_price.mul(&scale);
    let return_tax = sale.ext_tax.mul(&scale);
    let return_amt_inc_tax = return_amt.add(&return_tax);
    let return_ship_cost = sale.ext_ship_cost.mul(&scale);

    let refunded_cash = return_amt.mul(&Decimal::from_str("0.50"));
    let reversed_charge = return_amt.mul(&Decimal::from_str("0.30"));
    let store_credit = return_amt.sub(&refunded_cash).sub(&reversed_charge);

    let fee = random_decimal(0.5, 100.0, 2, stream);
    let net_loss = return_amt_inc_tax
        .add(&return_ship_cost)
        .add(&fee)
        .sub(&sale.ext_wholesale_cost.mul(&scale));

    ReturnPricing {
        return_quantity,
        return_amt,
        return_tax,
        return_amt_inc_tax,
        return_ship_cost,
        refunded_cash,
        reversed_charge,
        store_credit,
        fee,
        net_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pricing_is_deterministic_and_internally_consistent() {
        let mut s1 = RandomStream::from_seed(123, 0);
        let mut s2 = RandomStream::from_seed(123, 0);
        let wholesale = Decimal::from_str("10.00");
        let p1 = set_pricing(5, wholesale, PricingLimits::default(), &mut s1);
        let p2 = set_pricing(5, wholesale, PricingLimits::default(), &mut s2);
        assert_eq!(p1.net_paid.number, p2.net_paid.number);
        assert!(p1.list_price.as_f64() >= p1.wholesale_cost.as_f64());
        assert!(p1.sales_price.as_f64() <= p1.list_price.as_f64());
    }

    #[test]
    fn return_pricing_scales_with_fraction_returned() {
        let mut stream = RandomStream::from_seed(5, 0);
        let wholesale = Decimal::from_str("10.00");
        let sale = set_pricing(10, wholesale, PricingLimits::default(), &mut stream);
        let full_return = set_return_pricing(&sale, 10, &mut stream);
        assert_eq!(full_return.return_amt.number, sale.ext_sales_price.number);
    }
}
