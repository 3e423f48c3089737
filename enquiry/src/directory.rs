//! Country and dial-code directory.
//!
//! Static lookup table backing the nationality selector and the phone
//! dial-code picker. Entries are ordered alphabetically by country name;
//! country names are unique and act as the selection key, while calling
//! codes may repeat across territories.

use serde::Serialize;

/// One entry of the country directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryCode {
    /// International calling code, with leading `+`
    pub calling_code: &'static str,
    /// Country name, unique within the directory
    pub country_name: &'static str,
    /// ISO 3166-1 alpha-2 code
    pub iso_code: &'static str,
    /// Flag emoji shown next to the name
    pub flag_glyph: &'static str,
}

/// All directory entries, alphabetical by country name.
#[must_use]
pub const fn all() -> &'static [CountryCode] {
    COUNTRIES
}

/// Filter the directory by a free-text query.
///
/// A country matches if its name contains the query case-insensitively, or
/// its calling code or ISO code contains the query as a substring. An empty
/// (or whitespace-only) query returns the full directory. Result order
/// follows the directory order.
#[must_use]
pub fn filter(query: &str) -> Vec<CountryCode> {
    let query = query.trim();
    if query.is_empty() {
        return COUNTRIES.to_vec();
    }

    let needle = query.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| {
            c.country_name.to_lowercase().contains(&needle)
                || c.calling_code.contains(&needle)
                || c.iso_code.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

const COUNTRIES: &[CountryCode] = &[
    entry("+93", "Afghanistan", "AF", "🇦🇫"),
    entry("+355", "Albania", "AL", "🇦🇱"),
    entry("+213", "Algeria", "DZ", "🇩🇿"),
    entry("+376", "Andorra", "AD", "🇦🇩"),
    entry("+244", "Angola", "AO", "🇦🇴"),
    entry("+54", "Argentina", "AR", "🇦🇷"),
    entry("+374", "Armenia", "AM", "🇦🇲"),
    entry("+61", "Australia", "AU", "🇦🇺"),
    entry("+43", "Austria", "AT", "🇦🇹"),
    entry("+994", "Azerbaijan", "AZ", "🇦🇿"),
    entry("+1242", "Bahamas", "BS", "🇧🇸"),
    entry("+973", "Bahrain", "BH", "🇧🇭"),
    entry("+880", "Bangladesh", "BD", "🇧🇩"),
    entry("+375", "Belarus", "BY", "🇧🇾"),
    entry("+32", "Belgium", "BE", "🇧🇪"),
    entry("+501", "Belize", "BZ", "🇧🇿"),
    entry("+229", "Benin", "BJ", "🇧🇯"),
    entry("+975", "Bhutan", "BT", "🇧🇹"),
    entry("+591", "Bolivia", "BO", "🇧🇴"),
    entry("+387", "Bosnia and Herzegovina", "BA", "🇧🇦"),
    entry("+267", "Botswana", "BW", "🇧🇼"),
    entry("+55", "Brazil", "BR", "🇧🇷"),
    entry("+673", "Brunei", "BN", "🇧🇳"),
    entry("+359", "Bulgaria", "BG", "🇧🇬"),
    entry("+226", "Burkina Faso", "BF", "🇧🇫"),
    entry("+257", "Burundi", "BI", "🇧🇮"),
    entry("+855", "Cambodia", "KH", "🇰🇭"),
    entry("+237", "Cameroon", "CM", "🇨🇲"),
    entry("+1", "Canada", "CA", "🇨🇦"),
    entry("+238", "Cape Verde", "CV", "🇨🇻"),
    entry("+235", "Chad", "TD", "🇹🇩"),
    entry("+56", "Chile", "CL", "🇨🇱"),
    entry("+86", "China", "CN", "🇨🇳"),
    entry("+57", "Colombia", "CO", "🇨🇴"),
    entry("+506", "Costa Rica", "CR", "🇨🇷"),
    entry("+385", "Croatia", "HR", "🇭🇷"),
    entry("+53", "Cuba", "CU", "🇨🇺"),
    entry("+357", "Cyprus", "CY", "🇨🇾"),
    entry("+420", "Czech Republic", "CZ", "🇨🇿"),
    entry("+45", "Denmark", "DK", "🇩🇰"),
    entry("+253", "Djibouti", "DJ", "🇩🇯"),
    entry("+1809", "Dominican Republic", "DO", "🇩🇴"),
    entry("+593", "Ecuador", "EC", "🇪🇨"),
    entry("+20", "Egypt", "EG", "🇪🇬"),
    entry("+503", "El Salvador", "SV", "🇸🇻"),
    entry("+372", "Estonia", "EE", "🇪🇪"),
    entry("+251", "Ethiopia", "ET", "🇪🇹"),
    entry("+679", "Fiji", "FJ", "🇫🇯"),
    entry("+358", "Finland", "FI", "🇫🇮"),
    entry("+33", "France", "FR", "🇫🇷"),
    entry("+241", "Gabon", "GA", "🇬🇦"),
    entry("+220", "Gambia", "GM", "🇬🇲"),
    entry("+995", "Georgia", "GE", "🇬🇪"),
    entry("+49", "Germany", "DE", "🇩🇪"),
    entry("+233", "Ghana", "GH", "🇬🇭"),
    entry("+30", "Greece", "GR", "🇬🇷"),
    entry("+502", "Guatemala", "GT", "🇬🇹"),
    entry("+224", "Guinea", "GN", "🇬🇳"),
    entry("+592", "Guyana", "GY", "🇬🇾"),
    entry("+509", "Haiti", "HT", "🇭🇹"),
    entry("+504", "Honduras", "HN", "🇭🇳"),
    entry("+852", "Hong Kong", "HK", "🇭🇰"),
    entry("+36", "Hungary", "HU", "🇭🇺"),
    entry("+354", "Iceland", "IS", "🇮🇸"),
    entry("+91", "India", "IN", "🇮🇳"),
    entry("+62", "Indonesia", "ID", "🇮🇩"),
    entry("+98", "Iran", "IR", "🇮🇷"),
    entry("+964", "Iraq", "IQ", "🇮🇶"),
    entry("+353", "Ireland", "IE", "🇮🇪"),
    entry("+972", "Israel", "IL", "🇮🇱"),
    entry("+39", "Italy", "IT", "🇮🇹"),
    entry("+1876", "Jamaica", "JM", "🇯🇲"),
    entry("+81", "Japan", "JP", "🇯🇵"),
    entry("+962", "Jordan", "JO", "🇯🇴"),
    entry("+7", "Kazakhstan", "KZ", "🇰🇿"),
    entry("+254", "Kenya", "KE", "🇰🇪"),
    entry("+965", "Kuwait", "KW", "🇰🇼"),
    entry("+996", "Kyrgyzstan", "KG", "🇰🇬"),
    entry("+856", "Laos", "LA", "🇱🇦"),
    entry("+371", "Latvia", "LV", "🇱🇻"),
    entry("+961", "Lebanon", "LB", "🇱🇧"),
    entry("+218", "Libya", "LY", "🇱🇾"),
    entry("+423", "Liechtenstein", "LI", "🇱🇮"),
    entry("+370", "Lithuania", "LT", "🇱🇹"),
    entry("+352", "Luxembourg", "LU", "🇱🇺"),
    entry("+853", "Macau", "MO", "🇲🇴"),
    entry("+261", "Madagascar", "MG", "🇲🇬"),
    entry("+265", "Malawi", "MW", "🇲🇼"),
    entry("+60", "Malaysia", "MY", "🇲🇾"),
    entry("+960", "Maldives", "MV", "🇲🇻"),
    entry("+223", "Mali", "ML", "🇲🇱"),
    entry("+356", "Malta", "MT", "🇲🇹"),
    entry("+222", "Mauritania", "MR", "🇲🇷"),
    entry("+230", "Mauritius", "MU", "🇲🇺"),
    entry("+52", "Mexico", "MX", "🇲🇽"),
    entry("+373", "Moldova", "MD", "🇲🇩"),
    entry("+377", "Monaco", "MC", "🇲🇨"),
    entry("+976", "Mongolia", "MN", "🇲🇳"),
    entry("+382", "Montenegro", "ME", "🇲🇪"),
    entry("+212", "Morocco", "MA", "🇲🇦"),
    entry("+258", "Mozambique", "MZ", "🇲🇿"),
    entry("+95", "Myanmar", "MM", "🇲🇲"),
    entry("+264", "Namibia", "NA", "🇳🇦"),
    entry("+977", "Nepal", "NP", "🇳🇵"),
    entry("+31", "Netherlands", "NL", "🇳🇱"),
    entry("+64", "New Zealand", "NZ", "🇳🇿"),
    entry("+505", "Nicaragua", "NI", "🇳🇮"),
    entry("+227", "Niger", "NE", "🇳🇪"),
    entry("+234", "Nigeria", "NG", "🇳🇬"),
    entry("+389", "North Macedonia", "MK", "🇲🇰"),
    entry("+47", "Norway", "NO", "🇳🇴"),
    entry("+968", "Oman", "OM", "🇴🇲"),
    entry("+92", "Pakistan", "PK", "🇵🇰"),
    entry("+507", "Panama", "PA", "🇵🇦"),
    entry("+595", "Paraguay", "PY", "🇵🇾"),
    entry("+51", "Peru", "PE", "🇵🇪"),
    entry("+63", "Philippines", "PH", "🇵🇭"),
    entry("+48", "Poland", "PL", "🇵🇱"),
    entry("+351", "Portugal", "PT", "🇵🇹"),
    entry("+974", "Qatar", "QA", "🇶🇦"),
    entry("+40", "Romania", "RO", "🇷🇴"),
    entry("+7", "Russia", "RU", "🇷🇺"),
    entry("+250", "Rwanda", "RW", "🇷🇼"),
    entry("+966", "Saudi Arabia", "SA", "🇸🇦"),
    entry("+221", "Senegal", "SN", "🇸🇳"),
    entry("+381", "Serbia", "RS", "🇷🇸"),
    entry("+248", "Seychelles", "SC", "🇸🇨"),
    entry("+65", "Singapore", "SG", "🇸🇬"),
    entry("+421", "Slovakia", "SK", "🇸🇰"),
    entry("+386", "Slovenia", "SI", "🇸🇮"),
    entry("+252", "Somalia", "SO", "🇸🇴"),
    entry("+27", "South Africa", "ZA", "🇿🇦"),
    entry("+82", "South Korea", "KR", "🇰🇷"),
    entry("+34", "Spain", "ES", "🇪🇸"),
    entry("+94", "Sri Lanka", "LK", "🇱🇰"),
    entry("+249", "Sudan", "SD", "🇸🇩"),
    entry("+597", "Suriname", "SR", "🇸🇷"),
    entry("+46", "Sweden", "SE", "🇸🇪"),
    entry("+41", "Switzerland", "CH", "🇨🇭"),
    entry("+963", "Syria", "SY", "🇸🇾"),
    entry("+886", "Taiwan", "TW", "🇹🇼"),
    entry("+992", "Tajikistan", "TJ", "🇹🇯"),
    entry("+255", "Tanzania", "TZ", "🇹🇿"),
    entry("+66", "Thailand", "TH", "🇹🇭"),
    entry("+228", "Togo", "TG", "🇹🇬"),
    entry("+1868", "Trinidad and Tobago", "TT", "🇹🇹"),
    entry("+216", "Tunisia", "TN", "🇹🇳"),
    entry("+90", "Turkey", "TR", "🇹🇷"),
    entry("+993", "Turkmenistan", "TM", "🇹🇲"),
    entry("+256", "Uganda", "UG", "🇺🇬"),
    entry("+380", "Ukraine", "UA", "🇺🇦"),
    entry("+971", "United Arab Emirates", "AE", "🇦🇪"),
    entry("+44", "United Kingdom", "GB", "🇬🇧"),
    entry("+1", "United States", "US", "🇺🇸"),
    entry("+598", "Uruguay", "UY", "🇺🇾"),
    entry("+998", "Uzbekistan", "UZ", "🇺🇿"),
    entry("+58", "Venezuela", "VE", "🇻🇪"),
    entry("+84", "Vietnam", "VN", "🇻🇳"),
    entry("+967", "Yemen", "YE", "🇾🇪"),
    entry("+260", "Zambia", "ZM", "🇿🇲"),
    entry("+263", "Zimbabwe", "ZW", "🇿🇼"),
];

const fn entry(
    calling_code: &'static str,
    country_name: &'static str,
    iso_code: &'static str,
    flag_glyph: &'static str,
) -> CountryCode {
    CountryCode {
        calling_code,
        country_name,
        iso_code,
        flag_glyph,
    }
}

/// Look up a single entry by its unique country name.
#[must_use]
pub fn by_name(country_name: &str) -> Option<CountryCode> {
    COUNTRIES
        .iter()
        .find(|c| c.country_name == country_name)
        .copied()
}
