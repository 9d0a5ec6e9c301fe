use log::{error, info, warn};
use thiserror::Error;

use crate::lead::api::ApiError;
use crate::lead::models::{
    default_variant, service_option, CleaningType, LeadFormData, LeadSubmission, Pet,
    ServiceVariant, MAX_PEOPLE, MAX_ROOMS, MAX_SQ_FT, MIN_PEOPLE, MIN_ROOMS, MIN_SQ_FT,
};
use crate::lead::pricing::estimate_for;

pub const ZIP_LEN: usize = 5;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_NEIGHBORS: u32 = 8;
pub const MAX_NEIGHBORS: u32 = 19;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Contact = 1,
    HomeDetails = 2,
    ServiceSelection = 3,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Contact => "Your Contact",
            Step::HomeDetails => "Your Home",
            Step::ServiceSelection => "Your Service",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Please fill in all fields with a valid phone number.")]
pub struct IncompleteContact;

/// US mask: `(XXX) XXX-XXXX`. Non-digits are dropped, digits past ten are ignored.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..len.min(10)]),
    }
}

pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn sanitize_zip(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(ZIP_LEN).collect()
}

/// Maps a uniform sample in `[0, 1)` onto `[MIN_NEIGHBORS, MAX_NEIGHBORS]`.
pub fn neighbors_from_sample(sample: f64) -> u32 {
    let span = (MAX_NEIGHBORS - MIN_NEIGHBORS + 1) as f64;
    let offset = (sample.clamp(0.0, 1.0) * span).floor() as u32;
    MIN_NEIGHBORS + offset.min(MAX_NEIGHBORS - MIN_NEIGHBORS)
}

/// Everything the quote form owns between mount and a finished submission.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadState {
    pub step: Step,
    pub data: LeadFormData,
    pub city: Option<String>,
    pub neighbors: Option<u32>,
    pub error: Option<String>,
    pub is_submitting: bool,
    pub show_success: bool,
}

impl Default for LeadState {
    fn default() -> Self {
        Self {
            step: Step::Contact,
            data: LeadFormData::default(),
            city: None,
            neighbors: None,
            error: None,
            is_submitting: false,
            show_success: false,
        }
    }
}

impl LeadState {
    pub fn set_name(&mut self, name: String) {
        self.data.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.data.email = email;
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.data.phone = format_phone(raw);
    }

    /// Returns the zip to look up when the field just became complete.
    pub fn set_zip(&mut self, raw: &str) -> Option<String> {
        let previous = std::mem::replace(&mut self.data.zip_code, sanitize_zip(raw));
        if self.data.zip_code.len() == ZIP_LEN {
            (self.data.zip_code != previous).then(|| self.data.zip_code.clone())
        } else {
            self.city = None;
            self.neighbors = None;
            None
        }
    }

    /// Lookup results are applied in arrival order, not request order.
    pub fn apply_city_lookup(&mut self, result: Result<String, ApiError>, sample: f64) {
        match result {
            Ok(city) => {
                info!("Zip code resolved to {}", city);
                self.city = Some(city);
                self.neighbors = Some(neighbors_from_sample(sample));
            }
            Err(e) => {
                warn!("Zip lookup failed: {}", e);
                self.city = None;
                self.neighbors = None;
            }
        }
    }

    pub fn set_bedrooms(&mut self, count: u8) {
        self.data.bedrooms = count.clamp(MIN_ROOMS, MAX_ROOMS);
        self.reprice();
    }

    pub fn set_bathrooms(&mut self, count: u8) {
        self.data.bathrooms = count.clamp(MIN_ROOMS, MAX_ROOMS);
        self.reprice();
    }

    pub fn set_sq_ft(&mut self, sq_ft: u32) {
        self.data.sq_ft = sq_ft.clamp(MIN_SQ_FT, MAX_SQ_FT);
    }

    pub fn set_people(&mut self, count: u8) {
        self.data.people = count.clamp(MIN_PEOPLE, MAX_PEOPLE);
    }

    pub fn toggle_pet(&mut self, pet: Pet) {
        self.data.pets.toggle(pet);
    }

    pub fn set_cleaning_type(&mut self, cleaning_type: CleaningType) {
        if self.data.cleaning_type == cleaning_type {
            return;
        }
        self.data.cleaning_type = cleaning_type;
        self.data.service_detail = default_variant(cleaning_type);
        self.reprice();
    }

    pub fn set_service(&mut self, variant: ServiceVariant) {
        if service_option(variant).cadence != self.data.cleaning_type {
            return;
        }
        self.data.service_detail = variant;
        self.reprice();
    }

    fn reprice(&mut self) {
        self.data.estimated_price = estimate_for(&self.data);
    }

    pub fn validate_contact(&self) -> Result<(), IncompleteContact> {
        let d = &self.data;
        let filled = [&d.name, &d.email, &d.phone, &d.zip_code]
            .iter()
            .all(|field| !field.trim().is_empty());
        if filled && digit_count(&d.phone) >= MIN_PHONE_DIGITS {
            Ok(())
        } else {
            Err(IncompleteContact)
        }
    }

    pub fn next_step(&mut self) -> Result<Step, IncompleteContact> {
        let next = match self.step {
            Step::Contact => {
                if let Err(e) = self.validate_contact() {
                    self.error = Some(e.to_string());
                    return Err(e);
                }
                Step::HomeDetails
            }
            Step::HomeDetails => Step::ServiceSelection,
            Step::ServiceSelection => Step::ServiceSelection,
        };
        self.error = None;
        self.step = next;
        Ok(next)
    }

    pub fn prev_step(&mut self) -> Step {
        self.step = match self.step {
            Step::Contact | Step::HomeDetails => Step::Contact,
            Step::ServiceSelection => Step::HomeDetails,
        };
        self.step
    }

    /// Marks the form as in flight and hands back the body to post. Only the last
    /// step can submit, and only once at a time.
    pub fn begin_submission(&mut self) -> Option<LeadSubmission> {
        if self.step != Step::ServiceSelection || self.is_submitting {
            return None;
        }
        self.is_submitting = true;
        self.error = None;
        Some(LeadSubmission {
            form: self.data.clone(),
            city_detected: self.city.clone(),
        })
    }

    /// Every outcome ends in the success confirmation and a cleared form.
    pub fn finish_submission(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => info!("Lead delivered"),
            Err(ApiError::Status(status)) => {
                warn!("Webhook responded with {}, showing confirmation anyway", status)
            }
            Err(e) => error!("Lead submission failed: {}", e),
        }
        *self = LeadState {
            show_success: true,
            ..LeadState::default()
        };
    }

    pub fn close_success(&mut self) {
        self.show_success = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::models::Pets;
    use pretty_assertions::assert_eq;

    fn filled_contact() -> LeadState {
        let mut state = LeadState::default();
        state.set_name("Jessica Miller".into());
        state.set_email("jessica@example.com".into());
        state.set_phone("8432979935");
        state.set_zip("29483");
        state
    }

    #[test]
    fn phone_mask_grows_with_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("843"), "843");
        assert_eq!(format_phone("8432"), "(843) 2");
        assert_eq!(format_phone("843297"), "(843) 297");
        assert_eq!(format_phone("8432979"), "(843) 297-9");
        assert_eq!(format_phone("8432979935"), "(843) 297-9935");
    }

    #[test]
    fn phone_mask_is_stable_and_drops_extra_digits() {
        assert_eq!(format_phone("(843) 297-9935"), "(843) 297-9935");
        assert_eq!(format_phone("843-297-99351234"), "(843) 297-9935");
        assert_eq!(format_phone("(843) 2"), "(843) 2");
    }

    #[test]
    fn zip_keeps_five_digits() {
        assert_eq!(sanitize_zip("29a40-1"), "29401");
        assert_eq!(sanitize_zip("294011234"), "29401");
        assert_eq!(sanitize_zip("abc"), "");
    }

    #[test]
    fn neighbors_stay_in_range() {
        assert_eq!(neighbors_from_sample(0.0), 8);
        assert_eq!(neighbors_from_sample(0.999_999), 19);
        assert_eq!(neighbors_from_sample(1.0), 19);
        for i in 0..100 {
            let n = neighbors_from_sample(i as f64 / 100.0);
            assert!((MIN_NEIGHBORS..=MAX_NEIGHBORS).contains(&n));
        }
    }

    #[test]
    fn contact_step_blocks_on_each_missing_field() {
        let clears: [fn(&mut LeadState); 4] = [
            |s| s.data.name.clear(),
            |s| s.data.email.clear(),
            |s| s.data.phone.clear(),
            |s| s.data.zip_code.clear(),
        ];
        for clear in clears {
            let mut state = filled_contact();
            clear(&mut state);
            assert_eq!(state.next_step(), Err(IncompleteContact));
            assert_eq!(state.step, Step::Contact);
            assert_eq!(state.error.as_deref(), Some(IncompleteContact.to_string().as_str()));
        }
    }

    #[test]
    fn contact_step_blocks_on_short_phone() {
        let mut state = filled_contact();
        state.set_phone("843297993");
        assert_eq!(state.next_step(), Err(IncompleteContact));
        assert_eq!(state.step, Step::Contact);
    }

    #[test]
    fn contact_step_advances_and_clears_error() {
        let mut state = filled_contact();
        state.data.email.clear();
        assert!(state.next_step().is_err());
        state.set_email("jessica@example.com".into());
        assert_eq!(state.next_step(), Ok(Step::HomeDetails));
        assert_eq!(state.error, None);
        assert_eq!(state.next_step(), Ok(Step::ServiceSelection));
        assert_eq!(state.next_step(), Ok(Step::ServiceSelection));
    }

    #[test]
    fn going_back_is_unconditional() {
        let mut state = filled_contact();
        state.next_step().unwrap();
        state.next_step().unwrap();
        state.data.name.clear();
        assert_eq!(state.prev_step(), Step::HomeDetails);
        assert_eq!(state.prev_step(), Step::Contact);
        assert_eq!(state.prev_step(), Step::Contact);
    }

    #[test]
    fn price_follows_pricing_fields() {
        let mut state = LeadState::default();
        assert_eq!(state.data.estimated_price, 170);

        state.set_bedrooms(2);
        state.set_bathrooms(1);
        state.set_service(ServiceVariant::DeepClean);
        assert_eq!(state.data.estimated_price, 202);

        state.set_cleaning_type(CleaningType::Recurring);
        assert_eq!(state.data.service_detail, ServiceVariant::Weekly);
        assert_eq!(state.data.estimated_price, 124);

        state.set_bedrooms(3);
        state.set_bathrooms(2);
        assert_eq!(state.data.estimated_price, 152);

        // sq ft and people do not move the estimate
        state.set_sq_ft(4200);
        state.set_people(5);
        assert_eq!(state.data.estimated_price, 152);
    }

    #[test]
    fn service_from_other_cadence_is_ignored() {
        let mut state = LeadState::default();
        state.set_service(ServiceVariant::Monthly);
        assert_eq!(state.data.service_detail, ServiceVariant::DesignTime);
        assert_eq!(state.data.cleaning_type, CleaningType::OneTime);
    }

    #[test]
    fn room_counts_are_clamped() {
        let mut state = LeadState::default();
        state.set_bedrooms(9);
        state.set_bathrooms(0);
        assert_eq!((state.data.bedrooms, state.data.bathrooms), (5, 1));
        state.set_sq_ft(10);
        assert_eq!(state.data.sq_ft, MIN_SQ_FT);
    }

    #[test]
    fn pet_toggles_go_through_state() {
        let mut state = LeadState::default();
        state.toggle_pet(Pet::Dogs);
        assert_eq!(state.data.pets, Pets { dogs: true, cats: false, none: false });
        state.toggle_pet(Pet::NoPets);
        assert_eq!(state.data.pets, Pets { dogs: false, cats: false, none: true });
    }

    #[test]
    fn zip_lookup_only_for_five_digits() {
        let mut state = LeadState::default();
        for partial in ["", "2", "294", "2940"] {
            assert_eq!(state.set_zip(partial), None);
            assert_eq!(state.city, None);
        }
        assert_eq!(state.set_zip("29401"), Some("29401".to_string()));
        // a stray non-digit leaves the zip as it was
        assert_eq!(state.set_zip("29401x"), None);
    }

    #[test]
    fn city_lookup_result_is_applied() {
        let mut state = LeadState::default();
        state.set_zip("29401");
        state.apply_city_lookup(Ok("Charleston".into()), 0.5);
        assert_eq!(state.city.as_deref(), Some("Charleston"));
        assert_eq!(state.neighbors, Some(14));

        state.apply_city_lookup(Err(ApiError::NoPlace), 0.5);
        assert_eq!(state.city, None);
        assert_eq!(state.neighbors, None);
    }

    #[test]
    fn shortening_zip_clears_city() {
        let mut state = LeadState::default();
        state.set_zip("29401");
        state.apply_city_lookup(Ok("Charleston".into()), 0.1);
        assert_eq!(state.set_zip("2940"), None);
        assert_eq!(state.city, None);
    }

    #[test]
    fn submission_needs_last_step_and_is_not_repeated() {
        let mut state = filled_contact();
        assert_eq!(state.begin_submission(), None);

        state.next_step().unwrap();
        state.next_step().unwrap();
        state.apply_city_lookup(Ok("Summerville".into()), 0.0);

        let submission = state.begin_submission().expect("submission");
        assert_eq!(submission.form, state.data);
        assert_eq!(submission.city_detected.as_deref(), Some("Summerville"));
        assert!(state.is_submitting);
        assert_eq!(state.begin_submission(), None);
    }

    #[test]
    fn every_outcome_shows_success_and_resets() {
        let outcomes = [
            Ok(()),
            Err(ApiError::Status(502)),
            Err(ApiError::Network("Failed to fetch".into())),
        ];
        for outcome in outcomes {
            let mut state = filled_contact();
            state.next_step().unwrap();
            state.next_step().unwrap();
            state.begin_submission().unwrap();

            state.finish_submission(outcome);
            assert!(state.show_success);
            assert!(!state.is_submitting);
            assert_eq!(state.step, Step::Contact);
            assert_eq!(state.data, LeadFormData::default());
            assert_eq!(state.city, None);

            state.close_success();
            assert_eq!(state, LeadState::default());
        }
    }
}
