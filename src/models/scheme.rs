use crate::i18n::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernmentScheme {
    pub name: Localized,
    pub benefit: Localized,
    pub eligibility: Localized,
}
