//! Static country registries.
//!
//! Maritime Identification Digits (MIDs) per flag state and IBAN lengths per
//! country. Both tables are read-only for the lifetime of the process.

use std::sync::LazyLock;

use serde::Serialize;

/// MIDs allocated to the United States.
pub const US_MIDS: [u16; 4] = [366, 367, 368, 369];

/// A flag state and the MIDs it has been allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MmsiCountry {
    pub iso_code: &'static str,
    pub name: &'static str,
    pub mids: &'static [u16],
}

impl MmsiCountry {
    pub fn is_us(&self) -> bool {
        self.iso_code == "US"
    }
}

/// An IBAN country and its fixed IBAN length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IbanCountry {
    pub iso_code: &'static str,
    pub name: &'static str,
    pub length: usize,
}

macro_rules! mmsi {
    ($iso:literal, $name:literal, [$($mid:literal),+ $(,)?]) => {
        MmsiCountry {
            iso_code: $iso,
            name: $name,
            mids: &[$($mid),+],
        }
    };
}

pub static MMSI_COUNTRIES: &[MmsiCountry] = &[
    // Europe
    mmsi!("AL", "Albania", [201]),
    mmsi!("AD", "Andorra", [202]),
    mmsi!("AT", "Austria", [203]),
    mmsi!("PT", "Portugal", [204, 255, 263]),
    mmsi!("BE", "Belgium", [205]),
    mmsi!("BY", "Belarus", [206]),
    mmsi!("BG", "Bulgaria", [207]),
    mmsi!("VA", "Vatican City", [208]),
    mmsi!("CY", "Cyprus", [209, 210, 212]),
    mmsi!("DE", "Germany", [211, 218]),
    mmsi!("GE", "Georgia", [213]),
    mmsi!("MD", "Moldova", [214]),
    mmsi!("MT", "Malta", [215, 229, 248, 249, 256]),
    mmsi!("AM", "Armenia", [216]),
    mmsi!("DK", "Denmark", [219, 220]),
    mmsi!("ES", "Spain", [224, 225]),
    mmsi!("FR", "France", [226, 227, 228]),
    mmsi!("FI", "Finland", [230]),
    mmsi!("FO", "Faroe Islands", [231]),
    mmsi!("GB", "United Kingdom", [232, 233, 234, 235]),
    mmsi!("GI", "Gibraltar", [236]),
    mmsi!("GR", "Greece", [237, 239, 240, 241]),
    mmsi!("HR", "Croatia", [238]),
    mmsi!("MA", "Morocco", [242]),
    mmsi!("HU", "Hungary", [243]),
    mmsi!("NL", "Netherlands", [244, 245, 246]),
    mmsi!("IT", "Italy", [247]),
    mmsi!("IE", "Ireland", [250]),
    mmsi!("IS", "Iceland", [251]),
    mmsi!("LI", "Liechtenstein", [252]),
    mmsi!("LU", "Luxembourg", [253]),
    mmsi!("MC", "Monaco", [254]),
    mmsi!("NO", "Norway", [257, 258, 259]),
    mmsi!("PL", "Poland", [261]),
    mmsi!("ME", "Montenegro", [262]),
    mmsi!("RO", "Romania", [264]),
    mmsi!("SE", "Sweden", [265, 266]),
    mmsi!("SK", "Slovakia", [267]),
    mmsi!("SM", "San Marino", [268]),
    mmsi!("CH", "Switzerland", [269]),
    mmsi!("CZ", "Czech Republic", [270]),
    mmsi!("TR", "Turkey", [271]),
    mmsi!("UA", "Ukraine", [272]),
    mmsi!("RU", "Russia", [273]),
    mmsi!("MK", "North Macedonia", [274]),
    mmsi!("LV", "Latvia", [275]),
    mmsi!("EE", "Estonia", [276]),
    mmsi!("LT", "Lithuania", [277]),
    mmsi!("SI", "Slovenia", [278]),
    mmsi!("RS", "Serbia", [279]),
    // North and Central America, Caribbean
    mmsi!("AI", "Anguilla", [301]),
    mmsi!("AG", "Antigua and Barbuda", [304, 305]),
    mmsi!("CW", "Curacao", [306]),
    mmsi!("AW", "Aruba", [307]),
    mmsi!("BS", "Bahamas", [308, 309, 311]),
    mmsi!("BM", "Bermuda", [310]),
    mmsi!("BZ", "Belize", [312]),
    mmsi!("BB", "Barbados", [314]),
    mmsi!("CA", "Canada", [316]),
    mmsi!("KY", "Cayman Islands", [319]),
    mmsi!("CR", "Costa Rica", [321]),
    mmsi!("CU", "Cuba", [323]),
    mmsi!("DM", "Dominica", [325]),
    mmsi!("DO", "Dominican Republic", [327]),
    mmsi!("GP", "Guadeloupe", [329]),
    mmsi!("GD", "Grenada", [330]),
    mmsi!("GL", "Greenland", [331]),
    mmsi!("GT", "Guatemala", [332]),
    mmsi!("HN", "Honduras", [334]),
    mmsi!("HT", "Haiti", [336]),
    mmsi!("JM", "Jamaica", [339]),
    mmsi!("KN", "Saint Kitts and Nevis", [341]),
    mmsi!("LC", "Saint Lucia", [343]),
    mmsi!("MX", "Mexico", [345]),
    mmsi!("MQ", "Martinique", [347]),
    mmsi!("MS", "Montserrat", [348]),
    mmsi!("NI", "Nicaragua", [350]),
    mmsi!("PA", "Panama", [351, 352, 353, 354, 355, 356, 357, 370, 371, 372, 373, 374]),
    mmsi!("PR", "Puerto Rico", [358]),
    mmsi!("SV", "El Salvador", [359]),
    mmsi!("PM", "Saint Pierre and Miquelon", [361]),
    mmsi!("TT", "Trinidad and Tobago", [362]),
    mmsi!("TC", "Turks and Caicos Islands", [364]),
    mmsi!("US", "United States", [366, 367, 368, 369]),
    mmsi!("VC", "Saint Vincent and the Grenadines", [375, 376, 377]),
    mmsi!("VG", "British Virgin Islands", [378]),
    mmsi!("VI", "United States Virgin Islands", [379]),
    // Asia
    mmsi!("AF", "Afghanistan", [401]),
    mmsi!("SA", "Saudi Arabia", [403]),
    mmsi!("BD", "Bangladesh", [405]),
    mmsi!("BH", "Bahrain", [408]),
    mmsi!("BT", "Bhutan", [410]),
    mmsi!("CN", "China", [412, 413, 414]),
    mmsi!("TW", "Taiwan", [416]),
    mmsi!("LK", "Sri Lanka", [417]),
    mmsi!("IN", "India", [419]),
    mmsi!("IR", "Iran", [422]),
    mmsi!("AZ", "Azerbaijan", [423]),
    mmsi!("IQ", "Iraq", [425]),
    mmsi!("IL", "Israel", [428]),
    mmsi!("JP", "Japan", [431, 432]),
    mmsi!("TM", "Turkmenistan", [434]),
    mmsi!("KZ", "Kazakhstan", [436]),
    mmsi!("UZ", "Uzbekistan", [437]),
    mmsi!("JO", "Jordan", [438]),
    mmsi!("KR", "South Korea", [440, 441]),
    mmsi!("PS", "Palestine", [443]),
    mmsi!("KP", "North Korea", [445]),
    mmsi!("KW", "Kuwait", [447]),
    mmsi!("LB", "Lebanon", [450]),
    mmsi!("KG", "Kyrgyzstan", [451]),
    mmsi!("MO", "Macao", [453]),
    mmsi!("MV", "Maldives", [455]),
    mmsi!("MN", "Mongolia", [457]),
    mmsi!("NP", "Nepal", [459]),
    mmsi!("OM", "Oman", [461]),
    mmsi!("PK", "Pakistan", [463]),
    mmsi!("QA", "Qatar", [466]),
    mmsi!("SY", "Syria", [468]),
    mmsi!("AE", "United Arab Emirates", [470, 471]),
    mmsi!("TJ", "Tajikistan", [472]),
    mmsi!("YE", "Yemen", [473, 475]),
    mmsi!("HK", "Hong Kong", [477]),
    mmsi!("BA", "Bosnia and Herzegovina", [478]),
    // Oceania and South-East Asia
    mmsi!("AU", "Australia", [503]),
    mmsi!("MM", "Myanmar", [506]),
    mmsi!("BN", "Brunei", [508]),
    mmsi!("FM", "Micronesia", [510]),
    mmsi!("PW", "Palau", [511]),
    mmsi!("NZ", "New Zealand", [512]),
    mmsi!("KH", "Cambodia", [514, 515]),
    mmsi!("CX", "Christmas Island", [516]),
    mmsi!("CK", "Cook Islands", [518]),
    mmsi!("FJ", "Fiji", [520]),
    mmsi!("CC", "Cocos (Keeling) Islands", [523]),
    mmsi!("ID", "Indonesia", [525]),
    mmsi!("KI", "Kiribati", [529]),
    mmsi!("LA", "Laos", [531]),
    mmsi!("MY", "Malaysia", [533]),
    mmsi!("MP", "Northern Mariana Islands", [536]),
    mmsi!("MH", "Marshall Islands", [538]),
    mmsi!("NC", "New Caledonia", [540]),
    mmsi!("NU", "Niue", [542]),
    mmsi!("NR", "Nauru", [544]),
    mmsi!("PF", "French Polynesia", [546]),
    mmsi!("PH", "Philippines", [548]),
    mmsi!("TL", "Timor-Leste", [550]),
    mmsi!("PG", "Papua New Guinea", [553]),
    mmsi!("PN", "Pitcairn Islands", [555]),
    mmsi!("SB", "Solomon Islands", [557]),
    mmsi!("AS", "American Samoa", [559]),
    mmsi!("WS", "Samoa", [561]),
    mmsi!("SG", "Singapore", [563, 564, 565, 566]),
    mmsi!("TH", "Thailand", [567]),
    mmsi!("TO", "Tonga", [570]),
    mmsi!("TV", "Tuvalu", [572]),
    mmsi!("VN", "Vietnam", [574]),
    mmsi!("VU", "Vanuatu", [576, 577]),
    mmsi!("WF", "Wallis and Futuna", [578]),
    // Africa
    mmsi!("ZA", "South Africa", [601]),
    mmsi!("AO", "Angola", [603]),
    mmsi!("DZ", "Algeria", [605]),
    mmsi!("BI", "Burundi", [609]),
    mmsi!("BJ", "Benin", [610]),
    mmsi!("BW", "Botswana", [611]),
    mmsi!("CF", "Central African Republic", [612]),
    mmsi!("CM", "Cameroon", [613]),
    mmsi!("CG", "Republic of the Congo", [615]),
    mmsi!("KM", "Comoros", [616, 620]),
    mmsi!("CV", "Cape Verde", [617]),
    mmsi!("CI", "Ivory Coast", [619]),
    mmsi!("DJ", "Djibouti", [621]),
    mmsi!("EG", "Egypt", [622]),
    mmsi!("ET", "Ethiopia", [624]),
    mmsi!("ER", "Eritrea", [625]),
    mmsi!("GA", "Gabon", [626]),
    mmsi!("GH", "Ghana", [627]),
    mmsi!("GM", "Gambia", [629]),
    mmsi!("GW", "Guinea-Bissau", [630]),
    mmsi!("GQ", "Equatorial Guinea", [631]),
    mmsi!("GN", "Guinea", [632]),
    mmsi!("BF", "Burkina Faso", [633]),
    mmsi!("KE", "Kenya", [634]),
    mmsi!("LR", "Liberia", [636, 637]),
    mmsi!("SS", "South Sudan", [638]),
    mmsi!("LY", "Libya", [642]),
    mmsi!("LS", "Lesotho", [644]),
    mmsi!("MU", "Mauritius", [645]),
    mmsi!("MG", "Madagascar", [647]),
    mmsi!("ML", "Mali", [649]),
    mmsi!("MZ", "Mozambique", [650]),
    mmsi!("MR", "Mauritania", [654]),
    mmsi!("MW", "Malawi", [655]),
    mmsi!("NE", "Niger", [656]),
    mmsi!("NG", "Nigeria", [657]),
    mmsi!("NA", "Namibia", [659]),
    mmsi!("RE", "Reunion", [660]),
    mmsi!("RW", "Rwanda", [661]),
    mmsi!("SD", "Sudan", [662]),
    mmsi!("SN", "Senegal", [663]),
    mmsi!("SC", "Seychelles", [664]),
    mmsi!("SH", "Saint Helena", [665]),
    mmsi!("SO", "Somalia", [666]),
    mmsi!("SL", "Sierra Leone", [667]),
    mmsi!("ST", "Sao Tome and Principe", [668]),
    mmsi!("SZ", "Eswatini", [669]),
    mmsi!("TD", "Chad", [670]),
    mmsi!("TG", "Togo", [671]),
    mmsi!("TN", "Tunisia", [672]),
    mmsi!("TZ", "Tanzania", [674, 677]),
    mmsi!("UG", "Uganda", [675]),
    mmsi!("CD", "Democratic Republic of the Congo", [676]),
    mmsi!("ZM", "Zambia", [678]),
    mmsi!("ZW", "Zimbabwe", [679]),
    // South America
    mmsi!("AR", "Argentina", [701]),
    mmsi!("BR", "Brazil", [710]),
    mmsi!("BO", "Bolivia", [720]),
    mmsi!("CL", "Chile", [725]),
    mmsi!("CO", "Colombia", [730]),
    mmsi!("EC", "Ecuador", [735]),
    mmsi!("FK", "Falkland Islands", [740]),
    mmsi!("GF", "French Guiana", [745]),
    mmsi!("GY", "Guyana", [750]),
    mmsi!("PY", "Paraguay", [755]),
    mmsi!("PE", "Peru", [760]),
    mmsi!("SR", "Suriname", [765]),
    mmsi!("UY", "Uruguay", [770]),
    mmsi!("VE", "Venezuela", [775]),
];

macro_rules! iban {
    ($iso:literal, $name:literal, $len:literal) => {
        IbanCountry {
            iso_code: $iso,
            name: $name,
            length: $len,
        }
    };
}

pub static IBAN_COUNTRIES: &[IbanCountry] = &[
    iban!("AD", "Andorra", 24),
    iban!("AE", "United Arab Emirates", 23),
    iban!("AL", "Albania", 28),
    iban!("AT", "Austria", 20),
    iban!("AZ", "Azerbaijan", 28),
    iban!("BA", "Bosnia and Herzegovina", 20),
    iban!("BE", "Belgium", 16),
    iban!("BG", "Bulgaria", 22),
    iban!("BH", "Bahrain", 22),
    iban!("BR", "Brazil", 29),
    iban!("BY", "Belarus", 28),
    iban!("CH", "Switzerland", 21),
    iban!("CR", "Costa Rica", 22),
    iban!("CY", "Cyprus", 28),
    iban!("CZ", "Czech Republic", 24),
    iban!("DE", "Germany", 22),
    iban!("DK", "Denmark", 18),
    iban!("DO", "Dominican Republic", 28),
    iban!("EE", "Estonia", 20),
    iban!("EG", "Egypt", 29),
    iban!("ES", "Spain", 24),
    iban!("FI", "Finland", 18),
    iban!("FO", "Faroe Islands", 18),
    iban!("FR", "France", 27),
    iban!("GB", "United Kingdom", 22),
    iban!("GE", "Georgia", 22),
    iban!("GI", "Gibraltar", 23),
    iban!("GL", "Greenland", 18),
    iban!("GR", "Greece", 27),
    iban!("GT", "Guatemala", 28),
    iban!("HR", "Croatia", 21),
    iban!("HU", "Hungary", 28),
    iban!("IE", "Ireland", 22),
    iban!("IL", "Israel", 23),
    iban!("IQ", "Iraq", 23),
    iban!("IS", "Iceland", 26),
    iban!("IT", "Italy", 27),
    iban!("JO", "Jordan", 30),
    iban!("KW", "Kuwait", 30),
    iban!("KZ", "Kazakhstan", 20),
    iban!("LB", "Lebanon", 28),
    iban!("LC", "Saint Lucia", 32),
    iban!("LI", "Liechtenstein", 21),
    iban!("LT", "Lithuania", 20),
    iban!("LU", "Luxembourg", 20),
    iban!("LV", "Latvia", 21),
    iban!("MC", "Monaco", 27),
    iban!("MD", "Moldova", 24),
    iban!("ME", "Montenegro", 22),
    iban!("MK", "North Macedonia", 19),
    iban!("MR", "Mauritania", 27),
    iban!("MT", "Malta", 31),
    iban!("MU", "Mauritius", 30),
    iban!("NL", "Netherlands", 18),
    iban!("NO", "Norway", 15),
    iban!("PK", "Pakistan", 24),
    iban!("PL", "Poland", 28),
    iban!("PS", "Palestine", 29),
    iban!("PT", "Portugal", 25),
    iban!("QA", "Qatar", 29),
    iban!("RO", "Romania", 24),
    iban!("RS", "Serbia", 22),
    iban!("SA", "Saudi Arabia", 24),
    iban!("SC", "Seychelles", 31),
    iban!("SE", "Sweden", 24),
    iban!("SI", "Slovenia", 19),
    iban!("SK", "Slovakia", 24),
    iban!("SM", "San Marino", 27),
    iban!("ST", "Sao Tome and Principe", 25),
    iban!("SV", "El Salvador", 28),
    iban!("TL", "Timor-Leste", 23),
    iban!("TN", "Tunisia", 24),
    iban!("TR", "Turkey", 26),
    iban!("UA", "Ukraine", 29),
    iban!("VA", "Vatican City", 22),
    iban!("VG", "British Virgin Islands", 24),
    iban!("XK", "Kosovo", 20),
];

static ALL_MIDS: LazyLock<Vec<u16>> = LazyLock::new(|| {
    MMSI_COUNTRIES
        .iter()
        .flat_map(|c| c.mids.iter().copied())
        .collect()
});

/// Look up an MMSI flag state by ISO 3166-1 alpha-2 code (case-insensitive).
pub fn mmsi_country(code: &str) -> Option<&'static MmsiCountry> {
    let code = code.trim();
    MMSI_COUNTRIES
        .iter()
        .find(|c| c.iso_code.eq_ignore_ascii_case(code))
}

/// The flag state a MID is allocated to.
pub fn country_for_mid(mid: u16) -> Option<&'static MmsiCountry> {
    MMSI_COUNTRIES.iter().find(|c| c.mids.contains(&mid))
}

/// Every allocated MID across all flag states.
pub fn all_mids() -> &'static [u16] {
    &ALL_MIDS
}

/// Look up an IBAN country by ISO code (case-insensitive).
pub fn iban_country(code: &str) -> Option<&'static IbanCountry> {
    let code = code.trim();
    IBAN_COUNTRIES
        .iter()
        .find(|c| c.iso_code.eq_ignore_ascii_case(code))
}
