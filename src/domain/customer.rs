//! Customer record types for churn prediction.
//!
//! Field set and ordering match the bank customer churn training pipeline.

use serde::{Deserialize, Serialize};

/// Raw customer attributes as collected by the form.
///
/// The categorical fields (`geography`, `gender`) hold raw category strings;
/// replacing them with their trained integer codes happens in the prediction
/// pipeline, producing an [`EncodedRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Credit score (300-900)
    pub credit_score: u32,

    /// Country of residence, one of the encoder's known classes
    pub geography: String,

    /// Gender, one of the encoder's known classes
    pub gender: String,

    /// Age in years (18-100)
    pub age: u32,

    /// Years with the bank (0-10)
    pub tenure: u32,

    /// Account balance, non-negative
    pub balance: f64,

    /// Number of bank products held (1-4)
    pub num_of_products: u8,

    /// Holds a credit card: 0 = no, 1 = yes
    pub has_cr_card: u8,

    /// Active member: 0 = no, 1 = yes
    pub is_active_member: u8,

    /// Estimated yearly salary, non-negative
    pub estimated_salary: f64,
}

impl CustomerRecord {
    /// Validate that all fields are within their expected domains.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(300..=900).contains(&self.credit_score) {
            errors.push(format!(
                "Credit score {} out of range [300, 900]",
                self.credit_score
            ));
        }
        if self.geography.is_empty() {
            errors.push("Geography must not be empty".to_string());
        }
        if self.gender.is_empty() {
            errors.push("Gender must not be empty".to_string());
        }
        if !(18..=100).contains(&self.age) {
            errors.push(format!("Age {} out of range [18, 100]", self.age));
        }
        if self.tenure > 10 {
            errors.push(format!("Tenure {} out of range [0, 10]", self.tenure));
        }
        if !(self.balance >= 0.0) {
            errors.push(format!("Balance {} must be non-negative", self.balance));
        }
        if !(1..=4).contains(&self.num_of_products) {
            errors.push(format!(
                "Number of products {} out of range [1, 4]",
                self.num_of_products
            ));
        }
        if self.has_cr_card > 1 {
            errors.push(format!("Has credit card {} must be 0 or 1", self.has_cr_card));
        }
        if self.is_active_member > 1 {
            errors.push(format!(
                "Is active member {} must be 0 or 1",
                self.is_active_member
            ));
        }
        if !(self.estimated_salary >= 0.0) {
            errors.push(format!(
                "Estimated salary {} must be non-negative",
                self.estimated_salary
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Replace the categorical fields with their trained integer codes.
    #[must_use]
    pub fn encode(&self, geography_code: i64, gender_code: i64) -> EncodedRecord {
        EncodedRecord {
            credit_score: self.credit_score,
            geography: geography_code,
            gender: gender_code,
            age: self.age,
            tenure: self.tenure,
            balance: self.balance,
            num_of_products: self.num_of_products,
            has_cr_card: self.has_cr_card,
            is_active_member: self.is_active_member,
            estimated_salary: self.estimated_salary,
        }
    }
}

/// Feature names in training order.
///
/// The classifier was fitted on exactly this column order;
/// [`EncodedRecord::to_feature_vec`] must follow it.
pub const FEATURE_NAMES: [&str; 10] = [
    "CreditScore",
    "Geography",
    "Gender",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
];

/// Customer record with the categorical fields replaced by integer codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EncodedRecord {
    pub credit_score: u32,
    pub geography: i64,
    pub gender: i64,
    pub age: u32,
    pub tenure: u32,
    pub balance: f64,
    pub num_of_products: u8,
    pub has_cr_card: u8,
    pub is_active_member: u8,
    pub estimated_salary: f64,
}

impl EncodedRecord {
    /// Assemble the feature vector in training order.
    ///
    /// Assembly is keyed by struct field, never by input position, so the
    /// order in which values were collected cannot affect the vector.
    #[must_use]
    pub fn to_feature_vec(&self) -> [f64; 10] {
        [
            f64::from(self.credit_score),
            self.geography as f64,
            self.gender as f64,
            f64::from(self.age),
            f64::from(self.tenure),
            self.balance,
            f64::from(self.num_of_products),
            f64::from(self.has_cr_card),
            f64::from(self.is_active_member),
            self.estimated_salary,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            credit_score: 600,
            geography: "France".to_string(),
            gender: "Female".to_string(),
            age: 40,
            tenure: 3,
            balance: 60000.0,
            num_of_products: 1,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 50000.0,
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_boundary_record_is_valid() {
        let record = CustomerRecord {
            credit_score: 300,
            geography: "France".to_string(),
            gender: "Female".to_string(),
            age: 18,
            tenure: 0,
            balance: 0.0,
            num_of_products: 1,
            has_cr_card: 0,
            is_active_member: 0,
            estimated_salary: 0.0,
        };
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_collected() {
        let record = CustomerRecord {
            credit_score: 200, // invalid (< 300)
            age: 10,           // invalid (< 18)
            tenure: 11,        // invalid (> 10)
            ..sample_record()
        };
        let errors = record.validate().expect_err("must be invalid");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_feature_vec_order() {
        let encoded = sample_record().encode(0, 1);
        let vec = encoded.to_feature_vec();

        assert_eq!(vec.len(), FEATURE_NAMES.len());
        assert!((vec[0] - 600.0).abs() < f64::EPSILON); // CreditScore
        assert!((vec[1] - 0.0).abs() < f64::EPSILON); // Geography code
        assert!((vec[2] - 1.0).abs() < f64::EPSILON); // Gender code
        assert!((vec[3] - 40.0).abs() < f64::EPSILON); // Age
        assert!((vec[9] - 50000.0).abs() < f64::EPSILON); // EstimatedSalary
    }
}
