//! Monthly average daily irradiance (Wh/m²/day) for the supported Tunisian
//! sites. Rows follow `Month::ALL`, columns follow `City::ALL`.

use crate::models::irradiance::{City, IrradianceCell, IrradianceRow, Month};

pub struct IrradianceTable {
    values: [[u32; 6]; 12],
}

//                      Jendouba Tunis  Gabes Kairouan Tozeur Sfax
pub static IRRADIANCE: IrradianceTable = IrradianceTable {
    values: [
        /* Décembre  */ [2030, 2400, 2730, 2810, 2640, 2950],
        /* Janvier   */ [2140, 2280, 2920, 2910, 2770, 2950],
        /* Novembre  */ [2560, 2620, 3200, 3340, 3120, 3260],
        /* Février   */ [2820, 2900, 3700, 3610, 3610, 3730],
        /* Octobre   */ [3460, 3670, 4210, 4230, 4360, 4270],
        /* Mars      */ [3990, 4450, 4870, 4950, 4030, 4990],
        /* Septembre */ [4850, 5390, 5420, 5420, 5600, 5340],
        /* Avril     */ [4960, 4970, 5890, 5780, 6400, 5790],
        /* Août      */ [5850, 6440, 6540, 6490, 7170, 6860],
        /* Mai       */ [5970, 6100, 6790, 6910, 6760, 6830],
        /* Juin      */ [6690, 7550, 7160, 7360, 7460, 7380],
        /* Juillet   */ [6750, 7560, 7310, 7290, 7760, 7580],
    ],
};

impl IrradianceTable {
    pub fn get(&self, month: Month, city: City) -> u32 {
        self.values[month.index()][city.index()]
    }

    /// Irradiance for the current selection. Nothing is looked up until
    /// both selectors are set.
    pub fn lookup(&self, month: Option<Month>, city: Option<City>) -> Option<u32> {
        match (month, city) {
            (Some(m), Some(c)) => Some(self.get(m, c)),
            _ => None,
        }
    }

    pub fn rows(&self) -> Vec<IrradianceRow> {
        Month::ALL
            .into_iter()
            .map(|month| IrradianceRow {
                month,
                values: City::ALL
                    .into_iter()
                    .map(|city| IrradianceCell {
                        city,
                        irradiance_wh_m2_day: self.get(month, city),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(&str, [u32; 6]); 12] = [
        ("Décembre", [2030, 2400, 2730, 2810, 2640, 2950]),
        ("Janvier", [2140, 2280, 2920, 2910, 2770, 2950]),
        ("Novembre", [2560, 2620, 3200, 3340, 3120, 3260]),
        ("Février", [2820, 2900, 3700, 3610, 3610, 3730]),
        ("Octobre", [3460, 3670, 4210, 4230, 4360, 4270]),
        ("Mars", [3990, 4450, 4870, 4950, 4030, 4990]),
        ("Septembre", [4850, 5390, 5420, 5420, 5600, 5340]),
        ("Avril", [4960, 4970, 5890, 5780, 6400, 5790]),
        ("Août", [5850, 6440, 6540, 6490, 7170, 6860]),
        ("Mai", [5970, 6100, 6790, 6910, 6760, 6830]),
        ("Juin", [6690, 7550, 7160, 7360, 7460, 7380]),
        ("Juillet", [6750, 7560, 7310, 7290, 7760, 7580]),
    ];
    const CITIES: [&str; 6] = ["Jendouba", "Tunis", "Gabes", "Kairouan", "Tozeur", "Sfax"];

    #[test]
    fn every_pair_returns_the_tabulated_value() {
        for (month_name, row) in EXPECTED {
            let month: Month = month_name.parse().unwrap();
            for (city_name, expected) in CITIES.iter().zip(row) {
                let city: City = city_name.parse().unwrap();
                assert_eq!(
                    IRRADIANCE.get(month, city),
                    expected,
                    "month={} city={}",
                    month_name,
                    city_name
                );
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(IRRADIANCE.get(Month::Juillet, City::Sfax), 7580);
        assert_eq!(IRRADIANCE.get(Month::Mars, City::Tunis), 4450);
        assert_eq!(IRRADIANCE.get(Month::Decembre, City::Jendouba), 2030);
    }

    #[test]
    fn all_values_positive() {
        for m in Month::ALL {
            for c in City::ALL {
                assert!(IRRADIANCE.get(m, c) > 0);
            }
        }
    }

    #[test]
    fn lookup_waits_for_both_selectors() {
        assert_eq!(IRRADIANCE.lookup(None, None), None);
        assert_eq!(IRRADIANCE.lookup(Some(Month::Mai), None), None);
        assert_eq!(IRRADIANCE.lookup(None, Some(City::Tozeur)), None);
        assert_eq!(IRRADIANCE.lookup(Some(Month::Mai), Some(City::Tozeur)), Some(6760));
    }

    #[test]
    fn rows_cover_the_whole_table() {
        let rows = IRRADIANCE.rows();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.values.len() == 6));
        assert_eq!(rows[11].month, Month::Juillet);
        assert_eq!(rows[11].values[5].irradiance_wh_m2_day, 7580);
    }
}
