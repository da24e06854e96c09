//! ISO 4217 seed table.
//!
//! Built-in currency definitions loaded into every registry created with
//! [`CurrencyRegistry::new`](super::CurrencyRegistry::new). Templates use `1`
//! for the amount and `$` for the grapheme.

use super::currency::{Currency, CurrencyBuilder};

/// (code, numeric code, fraction, grapheme, template, decimal, thousand)
type Row = (
    &'static str,
    &'static str,
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

/// Build the seed currencies in ascending code order.
pub(crate) fn seed_currencies() -> impl Iterator<Item = Currency> {
    SEED_TABLE.iter().map(
        |&(code, numeric_code, fraction, grapheme, template, decimal, thousand)| {
            CurrencyBuilder::new(code)
                .numeric_code(numeric_code)
                .fraction(fraction)
                .grapheme(grapheme)
                .template(template)
                .decimal(decimal)
                .thousand(thousand)
                .build()
        },
    )
}

/// Sorted by code.
static SEED_TABLE: &[Row] = &[
    ("AED", "784", 2, ".د.إ", "1 $", ".", ","),
    ("AFN", "971", 2, "؋", "1 $", ".", ","),
    ("ALL", "008", 2, "L", "$1", ".", ","),
    ("AMD", "051", 2, "դր.", "1 $", ".", ","),
    ("ANG", "532", 2, "ƒ", "$1", ",", "."),
    ("AOA", "973", 2, "Kz", "1$", ".", ","),
    ("ARS", "032", 2, "$", "$1", ",", "."),
    ("AUD", "036", 2, "$", "$1", ".", ","),
    ("AWG", "533", 2, "ƒ", "1$", ".", ","),
    ("AZN", "944", 2, "₼", "$1", ".", ","),
    ("BAM", "977", 2, "KM", "$1", ",", "."),
    ("BBD", "052", 2, "$", "$1", ".", ","),
    ("BDT", "050", 2, "৳", "$1", ".", ","),
    ("BGN", "975", 2, "лв", "$1", ",", "."),
    ("BHD", "048", 3, ".د.ب", "1 $", ".", ","),
    ("BIF", "108", 0, "Fr", "1$", ".", ","),
    ("BMD", "060", 2, "$", "$1", ".", ","),
    ("BND", "096", 2, "$", "$1", ".", ","),
    ("BOB", "068", 2, "Bs.", "$1", ".", ","),
    ("BRL", "986", 2, "R$", "$1", ",", "."),
    ("BSD", "044", 2, "$", "$1", ".", ","),
    ("BTN", "064", 2, "Nu.", "$1", ".", ","),
    ("BWP", "072", 2, "P", "$1", ".", ","),
    ("BYN", "933", 2, "Br", "1 $", ",", " "),
    ("BZD", "084", 2, "BZ$", "$1", ".", ","),
    ("CAD", "124", 2, "$", "$1", ".", ","),
    ("CDF", "976", 2, "FC", "1$", ".", ","),
    ("CHF", "756", 2, "CHF", "1 $", ".", ","),
    ("CLP", "152", 0, "$", "$1", ",", "."),
    ("CNY", "156", 2, "元", "1 $", ".", ","),
    ("COP", "170", 2, "$", "$1", ",", "."),
    ("CRC", "188", 2, "₡", "$1", ".", ","),
    ("CUP", "192", 2, "$MN", "$1", ".", ","),
    ("CVE", "132", 2, "$", "$1", ".", ","),
    ("CZK", "203", 2, "Kč", "1 $", ",", "."),
    ("DJF", "262", 0, "Fdj", "1 $", ".", ","),
    ("DKK", "208", 2, "kr", "1 $", ",", "."),
    ("DOP", "214", 2, "RD$", "$1", ".", ","),
    ("DZD", "012", 2, ".د.ج", "1 $", ".", ","),
    ("EGP", "818", 2, "£", "$1", ".", ","),
    ("ERN", "232", 2, "Nfk", "1 $", ".", ","),
    ("ETB", "230", 2, "Br", "1 $", ".", ","),
    ("EUR", "978", 2, "€", "$1", ".", ","),
    ("FJD", "242", 2, "$", "$1", ".", ","),
    ("FKP", "238", 2, "£", "$1", ".", ","),
    ("GBP", "826", 2, "£", "$1", ".", ","),
    ("GEL", "981", 2, "ლ", "1 $", ".", ","),
    ("GHS", "936", 2, "₵", "$1", ".", ","),
    ("GIP", "292", 2, "£", "$1", ".", ","),
    ("GMD", "270", 2, "D", "1 $", ".", ","),
    ("GNF", "324", 0, "FG", "1 $", ".", ","),
    ("GTQ", "320", 2, "Q", "$1", ".", ","),
    ("GYD", "328", 2, "$", "$1", ".", ","),
    ("HKD", "344", 2, "$", "$1", ".", ","),
    ("HNL", "340", 2, "L", "$1", ".", ","),
    ("HTG", "332", 2, "G", "1 $", ".", ","),
    ("HUF", "348", 2, "Ft", "1 $", ",", "."),
    ("IDR", "360", 2, "Rp", "$1", ",", "."),
    ("ILS", "376", 2, "₪", "$1", ".", ","),
    ("INR", "356", 2, "₹", "$1", ".", ","),
    ("IQD", "368", 3, ".د.ع", "1 $", ".", ","),
    ("IRR", "364", 2, "﷼", "1 $", ".", ","),
    ("ISK", "352", 0, "kr", "1 $", ",", "."),
    ("JMD", "388", 2, "J$", "$1", ".", ","),
    ("JOD", "400", 3, ".د.ا", "1 $", ".", ","),
    ("JPY", "392", 0, "¥", "$1", ".", ","),
    ("KES", "404", 2, "KSh", "$1", ".", ","),
    ("KGS", "417", 2, "сом", "1 $", ".", ","),
    ("KHR", "116", 2, "៛", "1$", ".", ","),
    ("KMF", "174", 0, "CF", "1 $", ".", ","),
    ("KPW", "408", 2, "₩", "$1", ".", ","),
    ("KRW", "410", 0, "₩", "$1", ".", ","),
    ("KWD", "414", 3, ".د.ك", "1 $", ".", ","),
    ("KYD", "136", 2, "$", "$1", ".", ","),
    ("KZT", "398", 2, "₸", "1 $", ",", " "),
    ("LAK", "418", 2, "₭", "$1", ".", ","),
    ("LBP", "422", 2, "ل.ل", "1 $", ".", ","),
    ("LKR", "144", 2, "₨", "$1", ".", ","),
    ("LRD", "430", 2, "$", "$1", ".", ","),
    ("LSL", "426", 2, "L", "$1", ".", ","),
    ("LYD", "434", 3, ".د.ل", "1 $", ".", ","),
    ("MAD", "504", 2, ".د.م", "1 $", ".", ","),
    ("MDL", "498", 2, "lei", "1 $", ".", ","),
    ("MGA", "969", 2, "Ar", "1 $", ".", ","),
    ("MKD", "807", 2, "ден", "$1", ".", ","),
    ("MMK", "104", 2, "K", "$1", ".", ","),
    ("MNT", "496", 2, "₮", "$1", ".", ","),
    ("MOP", "446", 2, "P", "1 $", ".", ","),
    ("MRU", "929", 2, "UM", "$1", ".", ","),
    ("MUR", "480", 2, "₨", "$1", ".", ","),
    ("MVR", "462", 2, "MVR", "1 $", ".", ","),
    ("MWK", "454", 2, "MK", "$1", ".", ","),
    ("MXN", "484", 2, "$", "$1", ".", ","),
    ("MYR", "458", 2, "RM", "$1", ".", ","),
    ("MZN", "943", 2, "MT", "$1", ".", ","),
    ("NAD", "516", 2, "$", "$1", ".", ","),
    ("NGN", "566", 2, "₦", "$1", ".", ","),
    ("NIO", "558", 2, "C$", "$1", ".", ","),
    ("NOK", "578", 2, "kr", "1 $", ",", "."),
    ("NPR", "524", 2, "₨", "$1", ".", ","),
    ("NZD", "554", 2, "$", "$1", ".", ","),
    ("OMR", "512", 3, "﷼", "1 $", ".", ","),
    ("PAB", "590", 2, "B/.", "$1", ".", ","),
    ("PEN", "604", 2, "S/", "$1", ".", ","),
    ("PGK", "598", 2, "K", "1 $", ".", ","),
    ("PHP", "608", 2, "₱", "$1", ".", ","),
    ("PKR", "586", 2, "₨", "$1", ".", ","),
    ("PLN", "985", 2, "zł", "1 $", ",", " "),
    ("PYG", "600", 0, "₲", "1$", ".", ","),
    ("QAR", "634", 2, "﷼", "1 $", ".", ","),
    ("RON", "946", 2, "lei", "1 $", ",", "."),
    ("RSD", "941", 2, "дин.", "1 $", ",", "."),
    ("RUB", "643", 2, "₽", "1 $", ",", "."),
    ("RWF", "646", 0, "FRw", "1 $", ".", ","),
    ("SAR", "682", 2, "﷼", "1 $", ".", ","),
    ("SBD", "090", 2, "$", "$1", ".", ","),
    ("SCR", "690", 2, "₨", "$1", ".", ","),
    ("SDG", "938", 2, "£", "$1", ".", ","),
    ("SEK", "752", 2, "kr", "1 $", ",", " "),
    ("SGD", "702", 2, "$", "$1", ".", ","),
    ("SHP", "654", 2, "£", "$1", ".", ","),
    ("SLE", "925", 2, "Le", "$1", ".", ","),
    ("SOS", "706", 2, "Sh", "$1", ".", ","),
    ("SRD", "968", 2, "$", "$1", ".", ","),
    ("SSP", "728", 2, "£", "$1", ".", ","),
    ("STN", "930", 2, "Db", "$1", ".", ","),
    ("SVC", "222", 2, "₡", "$1", ".", ","),
    ("SYP", "760", 2, "£", "1 $", ".", ","),
    ("SZL", "748", 2, "E", "$1", ".", ","),
    ("THB", "764", 2, "฿", "$1", ".", ","),
    ("TJS", "972", 2, "SM", "$1", ".", ","),
    ("TMT", "934", 2, "T", "1 $", ".", ","),
    ("TND", "788", 3, ".د.ت", "1 $", ".", ","),
    ("TOP", "776", 2, "T$", "$1", ".", ","),
    ("TRY", "949", 2, "₺", "$1", ",", "."),
    ("TTD", "780", 2, "TT$", "$1", ".", ","),
    ("TWD", "901", 2, "NT$", "$1", ".", ","),
    ("TZS", "834", 2, "TSh", "$1", ".", ","),
    ("UAH", "980", 2, "₴", "1 $", ",", " "),
    ("UGX", "800", 0, "USh", "1 $", ".", ","),
    ("USD", "840", 2, "$", "$1", ".", ","),
    ("UYU", "858", 2, "$U", "$1", ",", "."),
    ("UZS", "860", 2, "so'm", "1 $", ".", ","),
    ("VES", "928", 2, "Bs.S", "$1", ",", "."),
    ("VND", "704", 0, "₫", "1 $", ",", "."),
    ("VUV", "548", 0, "Vt", "$1", ".", ","),
    ("WST", "882", 2, "T", "1 $", ".", ","),
    ("XAF", "950", 0, "Fr", "1 $", ".", ","),
    ("XCD", "951", 2, "$", "$1", ".", ","),
    ("XOF", "952", 0, "CFA", "1 $", ".", ","),
    ("XPF", "953", 0, "₣", "1 $", ".", ","),
    ("YER", "886", 2, "﷼", "1 $", ".", ","),
    ("ZAR", "710", 2, "R", "$1", ".", ","),
    ("ZMW", "967", 2, "ZK", "$1", ".", ","),
];
