use serde::{Deserialize, Serialize};

pub const BASE_PRICE: u32 = 100;
pub const PER_BEDROOM: u32 = 20;
pub const PER_BATHROOM: u32 = 15;

pub const MIN_ROOMS: u8 = 1;
pub const MAX_ROOMS: u8 = 5; // shown as "5+"
pub const MIN_PEOPLE: u8 = 1;
pub const MAX_PEOPLE: u8 = 6; // shown as "6+"
pub const MIN_SQ_FT: u32 = 500;
pub const MAX_SQ_FT: u32 = 5000;
pub const SQ_FT_STEP: u32 = 100;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningType {
    OneTime,
    Recurring,
}

impl CleaningType {
    pub fn label(self) -> &'static str {
        match self {
            CleaningType::OneTime => "One-Time",
            CleaningType::Recurring => "Recurring",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceVariant {
    DesignTime,
    DeepClean,
    MoveInOut,
    Weekly,
    BiWeekly,
    Monthly,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pets {
    pub dogs: bool,
    pub cats: bool,
    pub none: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pet {
    Dogs,
    Cats,
    NoPets,
}

impl Pets {
    /// Dogs and cats flip independently and clear `none`; `none` always wins outright.
    pub fn toggle(&mut self, pet: Pet) {
        match pet {
            Pet::Dogs => {
                self.dogs = !self.dogs;
                self.none = false;
            }
            Pet::Cats => {
                self.cats = !self.cats;
                self.none = false;
            }
            Pet::NoPets => {
                *self = Pets { dogs: false, cats: false, none: true };
            }
        }
    }
}

pub struct ServiceOption {
    pub id: ServiceVariant,
    pub label: &'static str,
    pub cadence: CleaningType,
    pub multiplier: Option<f64>,
    pub discount: Option<f64>,
    pub tag: Option<&'static str>,
    pub description: &'static str,
}

pub const SERVICE_OPTIONS: &[ServiceOption] = &[
    ServiceOption {
        id: ServiceVariant::DesignTime,
        label: "Standard Clean",
        cadence: CleaningType::OneTime,
        multiplier: Some(1.0),
        discount: None,
        tag: None,
        description: "Dusting, vacuuming, kitchen and bathrooms refreshed.",
    },
    ServiceOption {
        id: ServiceVariant::DeepClean,
        label: "Deep Clean",
        cadence: CleaningType::OneTime,
        multiplier: Some(1.3),
        discount: None,
        tag: Some("Popular"),
        description: "Baseboards, inside appliances, top-to-bottom detail.",
    },
    ServiceOption {
        id: ServiceVariant::MoveInOut,
        label: "Move-In / Move-Out",
        cadence: CleaningType::OneTime,
        multiplier: Some(1.5),
        discount: None,
        tag: None,
        description: "Empty home turnaround, deposit-ready.",
    },
    ServiceOption {
        id: ServiceVariant::Weekly,
        label: "Weekly",
        cadence: CleaningType::Recurring,
        multiplier: None,
        discount: Some(0.20),
        tag: Some("Best Value"),
        description: "Save 20% on every visit.",
    },
    ServiceOption {
        id: ServiceVariant::BiWeekly,
        label: "Bi-Weekly",
        cadence: CleaningType::Recurring,
        multiplier: None,
        discount: Some(0.15),
        tag: Some("Popular"),
        description: "Save 15% on every visit.",
    },
    ServiceOption {
        id: ServiceVariant::Monthly,
        label: "Monthly",
        cadence: CleaningType::Recurring,
        multiplier: None,
        discount: Some(0.10),
        tag: None,
        description: "Save 10% on every visit.",
    },
];

pub fn service_option(id: ServiceVariant) -> &'static ServiceOption {
    SERVICE_OPTIONS
        .iter()
        .find(|opt| opt.id == id)
        .unwrap_or(&SERVICE_OPTIONS[0])
}

pub fn options_for(cadence: CleaningType) -> impl Iterator<Item = &'static ServiceOption> {
    SERVICE_OPTIONS.iter().filter(move |opt| opt.cadence == cadence)
}

pub fn default_variant(cadence: CleaningType) -> ServiceVariant {
    match cadence {
        CleaningType::OneTime => ServiceVariant::DesignTime,
        CleaningType::Recurring => ServiceVariant::Weekly,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormData {
    // Step 1: contact
    pub name: String,
    pub email: String,
    pub phone: String,
    pub zip_code: String,

    // Step 2: home details
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub sq_ft: u32,
    pub people: u8,
    pub pets: Pets,

    // Step 3: service
    pub cleaning_type: CleaningType,
    pub service_detail: ServiceVariant,

    pub estimated_price: u32,
}

impl Default for LeadFormData {
    fn default() -> Self {
        let mut data = Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            zip_code: String::new(),
            bedrooms: 2,
            bathrooms: 2,
            sq_ft: 1500,
            people: 2,
            pets: Pets::default(),
            cleaning_type: CleaningType::OneTime,
            service_detail: ServiceVariant::DesignTime,
            estimated_price: 0,
        };
        data.estimated_price = crate::lead::pricing::estimate_for(&data);
        data
    }
}

/// Body posted to the lead webhook.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(flatten)]
    pub form: LeadFormData,
    pub city_detected: Option<String>,
}

/// `places[0]["place name"]` is the only part of the lookup response we read.
#[derive(Deserialize, Debug)]
pub struct ZipLookupResponse {
    #[serde(default)]
    pub places: Vec<ZipPlace>,
}

#[derive(Deserialize, Debug)]
pub struct ZipPlace {
    #[serde(rename = "place name")]
    pub place_name: String,
}

impl ZipLookupResponse {
    pub fn city(self) -> Option<String> {
        self.places.into_iter().next().map(|p| p.place_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none_clears_dogs_and_cats() {
        let mut pets = Pets { dogs: true, cats: true, none: false };
        pets.toggle(Pet::NoPets);
        assert_eq!(pets, Pets { dogs: false, cats: false, none: true });

        // pressing it again keeps it set
        pets.toggle(Pet::NoPets);
        assert_eq!(pets, Pets { dogs: false, cats: false, none: true });
    }

    #[test]
    fn dogs_from_default_only_sets_dogs() {
        let mut pets = Pets::default();
        pets.toggle(Pet::Dogs);
        assert_eq!(pets, Pets { dogs: true, cats: false, none: false });
    }

    #[test]
    fn dogs_and_cats_can_coexist_and_clear_none() {
        let mut pets = Pets { dogs: false, cats: false, none: true };
        pets.toggle(Pet::Cats);
        pets.toggle(Pet::Dogs);
        assert_eq!(pets, Pets { dogs: true, cats: true, none: false });

        pets.toggle(Pet::Dogs);
        assert_eq!(pets, Pets { dogs: false, cats: true, none: false });
    }

    #[test]
    fn every_variant_is_in_the_table_once() {
        for opt in SERVICE_OPTIONS {
            assert_eq!(SERVICE_OPTIONS.iter().filter(|o| o.id == opt.id).count(), 1);
            assert!(opt.multiplier.is_some() != opt.discount.is_some());
        }
        assert_eq!(options_for(CleaningType::OneTime).count(), 3);
        assert_eq!(options_for(CleaningType::Recurring).count(), 3);
    }

    #[test]
    fn default_variant_belongs_to_its_cadence() {
        for cadence in [CleaningType::OneTime, CleaningType::Recurring] {
            assert_eq!(service_option(default_variant(cadence)).cadence, cadence);
        }
    }

    #[test]
    fn submission_serializes_with_camel_case_keys() {
        let submission = LeadSubmission {
            form: LeadFormData {
                name: "Ana Souza".into(),
                email: "ana@example.com".into(),
                phone: "(843) 555-0199".into(),
                zip_code: "29401".into(),
                cleaning_type: CleaningType::Recurring,
                service_detail: ServiceVariant::BiWeekly,
                ..LeadFormData::default()
            },
            city_detected: Some("Charleston".into()),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["zipCode"], "29401");
        assert_eq!(json["sqFt"], 1500);
        assert_eq!(json["cleaningType"], "recurring");
        assert_eq!(json["serviceDetail"], "bi-weekly");
        assert_eq!(json["pets"]["none"], false);
        assert_eq!(json["cityDetected"], "Charleston");
        assert!(json.get("estimatedPrice").is_some());
    }

    #[test]
    fn missing_city_serializes_as_null() {
        let submission = LeadSubmission { form: LeadFormData::default(), city_detected: None };
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json["cityDetected"].is_null());
    }

    #[test]
    fn zip_response_reads_first_place_name() {
        let body = r#"{
            "post code": "29401",
            "country": "United States",
            "places": [
                {"place name": "Charleston", "state": "South Carolina", "state abbreviation": "SC"},
                {"place name": "Somewhere Else", "state": "South Carolina"}
            ]
        }"#;
        let resp: ZipLookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.city().as_deref(), Some("Charleston"));
    }

    #[test]
    fn zip_response_without_places_has_no_city() {
        let resp: ZipLookupResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.city(), None);

        let resp: ZipLookupResponse = serde_json::from_str(r#"{"places": []}"#).unwrap();
        assert_eq!(resp.city(), None);
    }
}
