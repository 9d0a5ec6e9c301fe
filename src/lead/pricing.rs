use crate::lead::models::{
    service_option, CleaningType, LeadFormData, ServiceVariant, BASE_PRICE, PER_BATHROOM,
    PER_BEDROOM,
};

/// Estimated price in whole dollars.
///
/// One-time jobs scale the base by the variant's multiplier, recurring jobs take the
/// variant's discount off the base. A variant from the other cadence leaves the base as is.
pub fn estimate_price(
    bedrooms: u8,
    bathrooms: u8,
    cleaning_type: CleaningType,
    service_detail: ServiceVariant,
) -> u32 {
    let base = (BASE_PRICE + bedrooms as u32 * PER_BEDROOM + bathrooms as u32 * PER_BATHROOM) as f64;
    let option = service_option(service_detail);

    let price = if option.cadence != cleaning_type {
        base
    } else {
        match cleaning_type {
            CleaningType::OneTime => base * option.multiplier.unwrap_or(1.0),
            CleaningType::Recurring => base * (1.0 - option.discount.unwrap_or(0.0)),
        }
    };

    price.round() as u32
}

pub fn estimate_for(data: &LeadFormData) -> u32 {
    estimate_price(data.bedrooms, data.bathrooms, data.cleaning_type, data.service_detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::models::{options_for, MAX_ROOMS, MIN_ROOMS};

    #[test]
    fn deep_clean_rounds_half_up() {
        // base 155 * 1.3 = 201.5
        assert_eq!(estimate_price(2, 1, CleaningType::OneTime, ServiceVariant::DeepClean), 202);
    }

    #[test]
    fn weekly_takes_twenty_percent_off() {
        // base 190 * 0.8
        assert_eq!(estimate_price(3, 2, CleaningType::Recurring, ServiceVariant::Weekly), 152);
    }

    #[test]
    fn matches_the_formula_for_every_room_count() {
        for b in MIN_ROOMS..=MAX_ROOMS {
            for w in MIN_ROOMS..=MAX_ROOMS {
                let base = (100 + 20 * b as u32 + 15 * w as u32) as f64;
                assert_eq!(
                    estimate_price(b, w, CleaningType::OneTime, ServiceVariant::DeepClean),
                    (base * 1.3).round() as u32
                );
                assert_eq!(
                    estimate_price(b, w, CleaningType::Recurring, ServiceVariant::Weekly),
                    (base * 0.8).round() as u32
                );
                assert_eq!(
                    estimate_price(b, w, CleaningType::OneTime, ServiceVariant::DesignTime),
                    base as u32
                );
            }
        }
    }

    #[test]
    fn monotonic_in_bedrooms_and_bathrooms() {
        for cadence in [CleaningType::OneTime, CleaningType::Recurring] {
            for opt in options_for(cadence) {
                for b in MIN_ROOMS..MAX_ROOMS {
                    for w in MIN_ROOMS..MAX_ROOMS {
                        let here = estimate_price(b, w, cadence, opt.id);
                        assert!(estimate_price(b + 1, w, cadence, opt.id) >= here);
                        assert!(estimate_price(b, w + 1, cadence, opt.id) >= here);
                    }
                }
            }
        }
    }

    #[test]
    fn move_out_and_monthly() {
        // base 100 + 20 + 15 = 135
        assert_eq!(estimate_price(1, 1, CleaningType::OneTime, ServiceVariant::MoveInOut), 203);
        assert_eq!(estimate_price(1, 1, CleaningType::Recurring, ServiceVariant::Monthly), 122);
        assert_eq!(estimate_price(1, 1, CleaningType::Recurring, ServiceVariant::BiWeekly), 115);
    }

    #[test]
    fn mismatched_cadence_uses_base() {
        assert_eq!(estimate_price(2, 2, CleaningType::Recurring, ServiceVariant::DeepClean), 170);
        assert_eq!(estimate_price(2, 2, CleaningType::OneTime, ServiceVariant::Weekly), 170);
    }
}
