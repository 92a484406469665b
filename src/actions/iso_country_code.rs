//! ISO 3166-1 country code validation.

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::Requirement;
use crate::types::message::ErrorMessage;

/// Alpha-2 and alpha-3 code of every ISO 3166-1 country.
pub const ISO_3166_ENTRIES: &[(&str, &str)] = &[
    ("AF", "AFG"),
    ("AL", "ALB"),
    ("DZ", "DZA"),
    ("AS", "ASM"),
    ("AD", "AND"),
    ("AO", "AGO"),
    ("AI", "AIA"),
    ("AQ", "ATA"),
    ("AG", "ATG"),
    ("AR", "ARG"),
    ("AM", "ARM"),
    ("AW", "ABW"),
    ("AU", "AUS"),
    ("AT", "AUT"),
    ("AZ", "AZE"),
    ("BS", "BHS"),
    ("BH", "BHR"),
    ("BD", "BGD"),
    ("BB", "BRB"),
    ("BY", "BLR"),
    ("BE", "BEL"),
    ("BZ", "BLZ"),
    ("BJ", "BEN"),
    ("BM", "BMU"),
    ("AX", "ALA"),
    ("BT", "BTN"),
    ("BO", "BOL"),
    ("BQ", "BES"),
    ("BA", "BIH"),
    ("BW", "BWA"),
    ("BV", "BVT"),
    ("BR", "BRA"),
    ("IO", "IOT"),
    ("BN", "BRN"),
    ("BG", "BGR"),
    ("BF", "BFA"),
    ("BI", "BDI"),
    ("CV", "CPV"),
    ("KH", "KHM"),
    ("CM", "CMR"),
    ("CA", "CAN"),
    ("KY", "CYM"),
    ("CF", "CAF"),
    ("TD", "TCD"),
    ("CL", "CHL"),
    ("CN", "CHN"),
    ("CX", "CXR"),
    ("CC", "CCK"),
    ("CO", "COL"),
    ("KM", "COM"),
    ("CD", "COD"),
    ("CG", "COG"),
    ("CK", "COK"),
    ("CR", "CRI"),
    ("HR", "HRV"),
    ("CU", "CUB"),
    ("CW", "CUW"),
    ("CY", "CYP"),
    ("CZ", "CZE"),
    ("CI", "CIV"),
    ("DK", "DNK"),
    ("DJ", "DJI"),
    ("DM", "DMA"),
    ("DO", "DOM"),
    ("EC", "ECU"),
    ("EG", "EGY"),
    ("SV", "SLV"),
    ("GQ", "GNQ"),
    ("ER", "ERI"),
    ("EE", "EST"),
    ("SZ", "SWZ"),
    ("ET", "ETH"),
    ("FK", "FLK"),
    ("FO", "FRO"),
    ("FJ", "FJI"),
    ("FI", "FIN"),
    ("FR", "FRA"),
    ("GF", "GUF"),
    ("PF", "PYF"),
    ("TF", "ATF"),
    ("GA", "GAB"),
    ("GM", "GMB"),
    ("GE", "GEO"),
    ("DE", "DEU"),
    ("GH", "GHA"),
    ("GI", "GIB"),
    ("GR", "GRC"),
    ("GL", "GRL"),
    ("GD", "GRD"),
    ("GP", "GLP"),
    ("GU", "GUM"),
    ("GT", "GTM"),
    ("GG", "GGY"),
    ("GN", "GIN"),
    ("GW", "GNB"),
    ("GY", "GUY"),
    ("HT", "HTI"),
    ("HM", "HMD"),
    ("VA", "VAT"),
    ("HN", "HND"),
    ("HK", "HKG"),
    ("HU", "HUN"),
    ("IS", "ISL"),
    ("IN", "IND"),
    ("ID", "IDN"),
    ("IR", "IRN"),
    ("IQ", "IRQ"),
    ("IE", "IRL"),
    ("IM", "IMN"),
    ("IL", "ISR"),
    ("IT", "ITA"),
    ("JM", "JAM"),
    ("JP", "JPN"),
    ("JE", "JEY"),
    ("JO", "JOR"),
    ("KZ", "KAZ"),
    ("KE", "KEN"),
    ("KI", "KIR"),
    ("KP", "PRK"),
    ("KR", "KOR"),
    ("KW", "KWT"),
    ("KG", "KGZ"),
    ("LA", "LAO"),
    ("LV", "LVA"),
    ("LB", "LBN"),
    ("LS", "LSO"),
    ("LR", "LBR"),
    ("LY", "LBY"),
    ("LI", "LIE"),
    ("LT", "LTU"),
    ("LU", "LUX"),
    ("MO", "MAC"),
    ("MG", "MDG"),
    ("MW", "MWI"),
    ("MY", "MYS"),
    ("MV", "MDV"),
    ("ML", "MLI"),
    ("MT", "MLT"),
    ("MH", "MHL"),
    ("MQ", "MTQ"),
    ("MR", "MRT"),
    ("MU", "MUS"),
    ("YT", "MYT"),
    ("MX", "MEX"),
    ("FM", "FSM"),
    ("MD", "MDA"),
    ("MC", "MCO"),
    ("MN", "MNG"),
    ("ME", "MNE"),
    ("MS", "MSR"),
    ("MA", "MAR"),
    ("MZ", "MOZ"),
    ("MM", "MMR"),
    ("NA", "NAM"),
    ("NR", "NRU"),
    ("NP", "NPL"),
    ("NL", "NLD"),
    ("NC", "NCL"),
    ("NZ", "NZL"),
    ("NI", "NIC"),
    ("NE", "NER"),
    ("NG", "NGA"),
    ("NU", "NIU"),
    ("NF", "NFK"),
    ("MK", "MKD"),
    ("MP", "MNP"),
    ("NO", "NOR"),
    ("OM", "OMN"),
    ("PK", "PAK"),
    ("PW", "PLW"),
    ("PS", "PSE"),
    ("PA", "PAN"),
    ("PG", "PNG"),
    ("PY", "PRY"),
    ("PE", "PER"),
    ("PH", "PHL"),
    ("PN", "PCN"),
    ("PL", "POL"),
    ("PT", "PRT"),
    ("PR", "PRI"),
    ("QA", "QAT"),
    ("RO", "ROU"),
    ("RU", "RUS"),
    ("RW", "RWA"),
    ("RE", "REU"),
    ("BL", "BLM"),
    ("SH", "SHN"),
    ("KN", "KNA"),
    ("LC", "LCA"),
    ("MF", "MAF"),
    ("PM", "SPM"),
    ("VC", "VCT"),
    ("WS", "WSM"),
    ("SM", "SMR"),
    ("ST", "STP"),
    ("SA", "SAU"),
    ("SN", "SEN"),
    ("RS", "SRB"),
    ("SC", "SYC"),
    ("SL", "SLE"),
    ("SG", "SGP"),
    ("SX", "SXM"),
    ("SK", "SVK"),
    ("SI", "SVN"),
    ("SB", "SLB"),
    ("SO", "SOM"),
    ("ZA", "ZAF"),
    ("GS", "SGS"),
    ("SS", "SSD"),
    ("ES", "ESP"),
    ("LK", "LKA"),
    ("SD", "SDN"),
    ("SR", "SUR"),
    ("SJ", "SJM"),
    ("SE", "SWE"),
    ("CH", "CHE"),
    ("SY", "SYR"),
    ("TW", "TWN"),
    ("TJ", "TJK"),
    ("TZ", "TZA"),
    ("TH", "THA"),
    ("TL", "TLS"),
    ("TG", "TGO"),
    ("TK", "TKL"),
    ("TO", "TON"),
    ("TT", "TTO"),
    ("TN", "TUN"),
    ("TM", "TKM"),
    ("TC", "TCA"),
    ("TV", "TUV"),
    ("TR", "TUR"),
    ("UG", "UGA"),
    ("UA", "UKR"),
    ("AE", "ARE"),
    ("GB", "GBR"),
    ("UM", "UMI"),
    ("US", "USA"),
    ("UY", "URY"),
    ("UZ", "UZB"),
    ("VU", "VUT"),
    ("VE", "VEN"),
    ("VN", "VNM"),
    ("VG", "VGB"),
    ("VI", "VIR"),
    ("WF", "WLF"),
    ("EH", "ESH"),
    ("YE", "YEM"),
    ("ZM", "ZMB"),
    ("ZW", "ZWE"),
];

fn is_country_code(code: &str) -> bool {
    ISO_3166_ENTRIES
        .iter()
        .any(|&(alpha2, alpha3)| alpha2 == code || alpha3 == code)
}

/// Validation action for country codes. Created by [`iso_country_code`].
#[derive(Debug, Clone, Default)]
pub struct IsoCountryCodeAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Creates a validation accepting any alpha-2 or alpha-3 country code.
///
/// Matching is exact and case-sensitive.
///
/// ```
/// use vali_rail::{actions::iso_country_code, Action, Config, Dataset, Value};
///
/// let mut dataset = Dataset::new(Value::from("usa"));
/// iso_country_code().run(&mut dataset, &Config::default());
/// assert_eq!(
///     dataset.issues()[0].message(),
///     "Invalid iso_country_code: Received \"usa\""
/// );
/// ```
#[inline]
pub fn iso_country_code() -> IsoCountryCodeAction {
    IsoCountryCodeAction::default()
}

impl Action for IsoCountryCodeAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Validation
    }

    fn action_type(&self) -> &'static str {
        "iso_country_code"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn requirement(&self) -> Option<Requirement> {
        Some(Requirement::predicate(|value| value.as_str().is_some_and(is_country_code)))
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() && !dataset.value().as_str().is_some_and(is_country_code) {
            dataset.add_issue(self, "iso_country_code", config, IssueInfo::default());
        }
    }
}
