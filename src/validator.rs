use crate::format::{PolishCarRegistration, PolishPostalCode, PolishRegionCode, PolishRegionName};
use crate::identifier::{
    PolishBankBranchChecksum, PolishNationalIdChecksum, PolishNipChecksum, PolishRegonChecksum,
};
use crate::observability::labels::Labels;
use crate::stats::ValidationMetrics;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{EnumIter, IntoStaticStr};

pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

const TYPE: &str = "type";

/// Selects one of the available checks, e.g. from `{"type": "Nip"}`.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(EnumIter, IntoStaticStr)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum PolishValidator {
    Nip,
    BankBranch,
    Pesel,
    Regon,
    RegionCode,
    RegionName,
    PostalCode {
        #[serde_as(deserialize_as = "DefaultOnNull")]
        #[serde(default)]
        strong: bool,
    },
    CarRegistration,
}

impl PolishValidator {
    /// Name used in the `type` label of the metrics, e.g. `bank_branch`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Wraps this validator so that each evaluation is counted, with `labels` attached to
    /// every metric.
    pub fn build(&self, labels: &Labels) -> MeteredValidator {
        MeteredValidator {
            validator: self.clone(),
            metrics: ValidationMetrics::new(&labels.clone_with_labels(&[(TYPE, self.name())])),
        }
    }
}

impl Validator for PolishValidator {
    fn is_valid(&self, input: &str) -> bool {
        match self {
            PolishValidator::Nip => PolishNipChecksum.is_valid(input),
            PolishValidator::BankBranch => PolishBankBranchChecksum.is_valid(input),
            PolishValidator::Pesel => PolishNationalIdChecksum.is_valid(input),
            PolishValidator::Regon => PolishRegonChecksum.is_valid(input),
            PolishValidator::RegionCode => PolishRegionCode.is_valid(input),
            PolishValidator::RegionName => PolishRegionName.is_valid(input),
            PolishValidator::PostalCode { strong } => {
                PolishPostalCode { strong: *strong }.is_valid(input)
            }
            PolishValidator::CarRegistration => PolishCarRegistration.is_valid(input),
        }
    }
}

/// A [PolishValidator] reporting the outcome of every evaluation to `metrics`.
pub struct MeteredValidator {
    validator: PolishValidator,
    metrics: ValidationMetrics,
}

impl MeteredValidator {
    pub fn validator(&self) -> &PolishValidator {
        &self.validator
    }
}

impl Validator for MeteredValidator {
    fn is_valid(&self, input: &str) -> bool {
        let is_valid = self.validator.is_valid(input);
        self.metrics.record(is_valid);
        is_valid
    }
}
