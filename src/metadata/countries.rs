// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::macros::country;

use super::CountryRecord;

/// Every country the field offers, in picker order. The primary market comes
/// first; it is also the default selection.
pub(super) static COUNTRY_RECORDS: &[CountryRecord] = &[
    country!("US", "United States", "+1", 10, "XXX-XXX-XXXX"),
    country!("CA", "Canada", "+1", 10, "XXX-XXX-XXXX"),
    country!("GB", "United Kingdom", "+44", 10, "XXXX XXX XXX"),
    country!("AU", "Australia", "+61", 9, "XXXX XXX XXX"),
    country!("DE", "Germany", "+49", 11, "XXX XXXXXXXX"),
    country!("FR", "France", "+33", 9, "XX XX XX XX XX"),
    country!("IT", "Italy", "+39", 10, "XXX XXX XXXX"),
    country!("ES", "Spain", "+34", 9, "XXX XX XX XX"),
    country!("NL", "Netherlands", "+31"),
    country!("BE", "Belgium", "+32"),
    country!("CH", "Switzerland", "+41"),
    country!("AT", "Austria", "+43"),
    country!("SE", "Sweden", "+46"),
    country!("NO", "Norway", "+47"),
    country!("DK", "Denmark", "+45"),
    country!("FI", "Finland", "+358"),
    country!("PL", "Poland", "+48"),
    country!("CZ", "Czech Republic", "+420"),
    country!("HU", "Hungary", "+36"),
    country!("RO", "Romania", "+40"),
    country!("BG", "Bulgaria", "+359"),
    country!("HR", "Croatia", "+385"),
    country!("SI", "Slovenia", "+386"),
    country!("SK", "Slovakia", "+421"),
    country!("LT", "Lithuania", "+370"),
    country!("LV", "Latvia", "+371"),
    country!("EE", "Estonia", "+372"),
    country!("IE", "Ireland", "+353"),
    country!("PT", "Portugal", "+351"),
    country!("GR", "Greece", "+30"),
    country!("CY", "Cyprus", "+357"),
    country!("MT", "Malta", "+356"),
    country!("LU", "Luxembourg", "+352"),
    country!("IS", "Iceland", "+354"),
    country!("LI", "Liechtenstein", "+423"),
    country!("MC", "Monaco", "+377"),
    country!("SM", "San Marino", "+378"),
    country!("VA", "Vatican City", "+379"),
    country!("AD", "Andorra", "+376"),
    country!("JP", "Japan", "+81", 10, "XX-XXXX-XXXX"),
    country!("KR", "South Korea", "+82", 10, "XXX-XXXX-XXXX"),
    country!("CN", "China", "+86", 11, "XXX XXXX XXXX"),
    country!("IN", "India", "+91", 10, "XXXXX XXXXX"),
    country!("TH", "Thailand", "+66"),
    country!("SG", "Singapore", "+65"),
    country!("MY", "Malaysia", "+60"),
    country!("ID", "Indonesia", "+62"),
    country!("PH", "Philippines", "+63"),
    country!("VN", "Vietnam", "+84"),
    country!("TW", "Taiwan", "+886"),
    country!("HK", "Hong Kong", "+852"),
    country!("MO", "Macau", "+853"),
    country!("BR", "Brazil", "+55", 10, "XX XXXXX-XXXX"),
    country!("AR", "Argentina", "+54"),
    country!("CL", "Chile", "+56"),
    country!("CO", "Colombia", "+57"),
    country!("PE", "Peru", "+51"),
    country!("VE", "Venezuela", "+58"),
    country!("EC", "Ecuador", "+593"),
    country!("BO", "Bolivia", "+591"),
    country!("PY", "Paraguay", "+595"),
    country!("UY", "Uruguay", "+598"),
    country!("GY", "Guyana", "+592"),
    country!("SR", "Suriname", "+597"),
    country!("GF", "French Guiana", "+594"),
    country!("FK", "Falkland Islands", "+500"),
    country!("MX", "Mexico", "+52", 10, "XXX XXX XXXX"),
    country!("GT", "Guatemala", "+502"),
    country!("BZ", "Belize", "+501"),
    country!("SV", "El Salvador", "+503"),
    country!("HN", "Honduras", "+504"),
    country!("NI", "Nicaragua", "+505"),
    country!("CR", "Costa Rica", "+506"),
    country!("PA", "Panama", "+507"),
    country!("CU", "Cuba", "+53"),
    country!("JM", "Jamaica", "+1876"),
    country!("HT", "Haiti", "+509"),
    country!("DO", "Dominican Republic", "+1809"),
    country!("PR", "Puerto Rico", "+1787"),
    country!("TT", "Trinidad and Tobago", "+1868"),
    country!("BB", "Barbados", "+1246"),
    country!("AG", "Antigua and Barbuda", "+1268"),
    country!("DM", "Dominica", "+1767"),
    country!("GD", "Grenada", "+1473"),
    country!("KN", "Saint Kitts and Nevis", "+1869"),
    country!("LC", "Saint Lucia", "+1758"),
    country!("VC", "Saint Vincent and the Grenadines", "+1784"),
    country!("BS", "Bahamas", "+1242"),
    country!("RU", "Russia", "+7", 10, "XXX XXX-XX-XX"),
    country!("UA", "Ukraine", "+380"),
    country!("BY", "Belarus", "+375"),
    country!("MD", "Moldova", "+373"),
    country!("GE", "Georgia", "+995"),
    country!("AM", "Armenia", "+374"),
    country!("AZ", "Azerbaijan", "+994"),
    country!("KZ", "Kazakhstan", "+7"),
    country!("UZ", "Uzbekistan", "+998"),
    country!("TM", "Turkmenistan", "+993"),
    country!("TJ", "Tajikistan", "+992"),
    country!("KG", "Kyrgyzstan", "+996"),
    country!("MN", "Mongolia", "+976"),
    country!("AF", "Afghanistan", "+93"),
    country!("PK", "Pakistan", "+92", 10, "XXX-XXXXXXX"),
    country!("BD", "Bangladesh", "+880", 10, "XXXX-XXXXXX"),
    country!("LK", "Sri Lanka", "+94"),
    country!("MV", "Maldives", "+960"),
    country!("BT", "Bhutan", "+975"),
    country!("NP", "Nepal", "+977"),
    country!("MM", "Myanmar", "+95"),
    country!("LA", "Laos", "+856"),
    country!("KH", "Cambodia", "+855"),
    country!("BN", "Brunei", "+673"),
    country!("TL", "East Timor", "+670"),
    country!("PG", "Papua New Guinea", "+675"),
    country!("FJ", "Fiji", "+679"),
    country!("SB", "Solomon Islands", "+677"),
    country!("VU", "Vanuatu", "+678"),
    country!("NC", "New Caledonia", "+687"),
    country!("PF", "French Polynesia", "+689"),
    country!("WS", "Samoa", "+685"),
    country!("TO", "Tonga", "+676"),
    country!("KI", "Kiribati", "+686"),
    country!("TV", "Tuvalu", "+688"),
    country!("NR", "Nauru", "+674"),
    country!("PW", "Palau", "+680"),
    country!("FM", "Micronesia", "+691"),
    country!("MH", "Marshall Islands", "+692"),
    country!("NZ", "New Zealand", "+64"),
    country!("ZA", "South Africa", "+27", 9, "XX XXX XXXX"),
    country!("EG", "Egypt", "+20", 10, "XXX XXX XXXX"),
    country!("LY", "Libya", "+218"),
    country!("TN", "Tunisia", "+216"),
    country!("DZ", "Algeria", "+213"),
    country!("MA", "Morocco", "+212"),
    country!("SD", "Sudan", "+249"),
    country!("SS", "South Sudan", "+211"),
    country!("ET", "Ethiopia", "+251"),
    country!("ER", "Eritrea", "+291"),
    country!("DJ", "Djibouti", "+253"),
    country!("SO", "Somalia", "+252"),
    country!("KE", "Kenya", "+254", 9, "XXX XXX XXX"),
    country!("UG", "Uganda", "+256"),
    country!("TZ", "Tanzania", "+255"),
    country!("RW", "Rwanda", "+250"),
    country!("BI", "Burundi", "+257"),
    country!("CD", "Democratic Republic of the Congo", "+243"),
    country!("CG", "Republic of the Congo", "+242"),
    country!("CF", "Central African Republic", "+236"),
    country!("TD", "Chad", "+235"),
    country!("CM", "Cameroon", "+237"),
    country!("GQ", "Equatorial Guinea", "+240"),
    country!("GA", "Gabon", "+241"),
    country!("ST", "São Tomé and Príncipe", "+239"),
    country!("AO", "Angola", "+244"),
    country!("ZM", "Zambia", "+260"),
    country!("ZW", "Zimbabwe", "+263"),
    country!("BW", "Botswana", "+267"),
    country!("NA", "Namibia", "+264"),
    country!("SZ", "Eswatini", "+268"),
    country!("LS", "Lesotho", "+266"),
    country!("MG", "Madagascar", "+261"),
    country!("MU", "Mauritius", "+230"),
    country!("SC", "Seychelles", "+248"),
    country!("KM", "Comoros", "+269"),
    country!("YT", "Mayotte", "+262"),
    country!("RE", "Réunion", "+262"),
    country!("MZ", "Mozambique", "+258"),
    country!("MW", "Malawi", "+265"),
    country!("GH", "Ghana", "+233"),
    country!("TG", "Togo", "+228"),
    country!("BJ", "Benin", "+229"),
    country!("BF", "Burkina Faso", "+226"),
    country!("NE", "Niger", "+227"),
    country!("NG", "Nigeria", "+234", 10, "XXX XXX XXXX"),
    country!("CI", "Ivory Coast", "+225"),
    country!("LR", "Liberia", "+231"),
    country!("SL", "Sierra Leone", "+232"),
    country!("GN", "Guinea", "+224"),
    country!("GW", "Guinea-Bissau", "+245"),
    country!("GM", "Gambia", "+220"),
    country!("SN", "Senegal", "+221"),
    country!("ML", "Mali", "+223"),
    country!("MR", "Mauritania", "+222"),
    country!("CV", "Cape Verde", "+238"),
    country!("SA", "Saudi Arabia", "+966", 9, "XXX XXX XXX"),
    country!("AE", "United Arab Emirates", "+971", 9, "XX XXX XXXX"),
    country!("QA", "Qatar", "+974"),
    country!("BH", "Bahrain", "+973"),
    country!("KW", "Kuwait", "+965"),
    country!("OM", "Oman", "+968"),
    country!("YE", "Yemen", "+967"),
    country!("IQ", "Iraq", "+964", 10, "XXX XXX XXXX"),
    country!("IR", "Iran", "+98", 10, "XXX XXX XXXX"),
    country!("TR", "Turkey", "+90", 10, "XXX XXX XX XX"),
    country!("IL", "Israel", "+972", 9, "XX-XXX-XXXX"),
    country!("PS", "Palestine", "+970", 9, "XX XXX XXXX"),
    country!("JO", "Jordan", "+962", 9, "XX XXX XXXX"),
    country!("LB", "Lebanon", "+961", 8, "XX XXX XXX"),
    country!("SY", "Syria", "+963", 9, "XXX XXX XXX"),
];
