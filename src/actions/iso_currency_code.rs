//! ISO 4217 currency code validation.

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::Requirement;
use crate::types::message::ErrorMessage;

/// Active ISO 4217 alphabetic currency codes, sorted.
pub const ISO_4217_CURRENCY_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL",
    "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF", "CLP", "CNY",
    "COP", "CRC", "CUC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP",
    "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HRK", "HTG", "HUF", "IDR",
    "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS",
    "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR",
    "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP",
    "MRU", "MUR", "MVR", "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO",
    "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN",
    "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG",
    "SEK", "SGD", "SHP", "SLE", "SLL", "SOS", "SRD", "SSP", "STN", "SVC",
    "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD",
    "TZS", "UAH", "UGX", "USD", "UYU", "UZS", "VES", "VND", "VUV", "WST",
    "XAF", "XAG", "XAU", "XCD", "XDR", "XOF", "XPD", "XPF", "XPT", "XTS",
    "XXX", "YER", "ZAR", "ZMW", "ZWG",
];

fn is_currency_code(code: &str) -> bool {
    ISO_4217_CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Validation action for currency codes. Created by [`iso_currency_code`].
#[derive(Debug, Clone, Default)]
pub struct IsoCurrencyCodeAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Creates a validation accepting active ISO 4217 currency codes.
#[inline]
pub fn iso_currency_code() -> IsoCurrencyCodeAction {
    IsoCurrencyCodeAction::default()
}

impl Action for IsoCurrencyCodeAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Validation
    }

    fn action_type(&self) -> &'static str {
        "iso_currency_code"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn requirement(&self) -> Option<Requirement> {
        Some(Requirement::predicate(|value| value.as_str().is_some_and(is_currency_code)))
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() && !dataset.value().as_str().is_some_and(is_currency_code) {
            dataset.add_issue(self, "iso_currency_code", config, IssueInfo::default());
        }
    }
}
