use crate::domain::model::{Characteristics, TradeClass, TradeClasses};

/// Every trade classification the world qualifies for, in table order.
pub fn classify(c: &Characteristics) -> TradeClasses {
    let (size, atm, hyd, pop, gov) = (
        c.size,
        c.atmosphere,
        c.hydrographics,
        c.population,
        c.government,
    );

    let rules: [(TradeClass, bool); 11] = [
        (
            TradeClass::Agricultural,
            (4..=9).contains(&atm) && (4..=8).contains(&hyd) && (5..=7).contains(&pop),
        ),
        (TradeClass::NonAgricultural, atm <= 3 && hyd <= 3 && pop >= 6),
        (
            TradeClass::Industrial,
            matches!(atm, 0 | 1 | 2 | 4 | 7 | 9) && pop >= 9,
        ),
        (TradeClass::NonIndustrial, pop <= 6),
        (
            TradeClass::Rich,
            matches!(atm, 6 | 8) && (6..=8).contains(&pop) && (4..=9).contains(&gov),
        ),
        (TradeClass::Poor, (2..=5).contains(&atm) && hyd <= 3),
        (TradeClass::WaterWorld, hyd == 10),
        (TradeClass::DesertWorld, hyd == 0 && atm >= 2),
        (TradeClass::VacuumWorld, atm == 0),
        (TradeClass::AsteroidBelt, size == 0),
        (TradeClass::IceCapped, atm < 2 && hyd > 1),
    ];

    TradeClasses(
        rules
            .into_iter()
            .filter_map(|(class, applies)| applies.then_some(class))
            .collect(),
    )
}
