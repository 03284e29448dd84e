//! Reference band-plan data for the supported standards, transcribed from
//! the 3GPP, IEEE 802.11 and GNSS allocation tables. Data only; derivation
//! into numeric requirements happens in the catalog.

use super::types::{BandDef, DuplexMode, Standard};

const fn fdd(band: &'static str, uplink: &'static str, downlink: &'static str) -> BandDef {
    BandDef {
        band,
        uplink: Some(uplink),
        downlink: Some(downlink),
        frequency: None,
        frequencies: &[],
        mode: Some(DuplexMode::Fdd),
    }
}

const fn tdd(band: &'static str, carrier: &'static str) -> BandDef {
    BandDef {
        band,
        uplink: Some(carrier),
        downlink: None,
        frequency: None,
        frequencies: &[],
        mode: Some(DuplexMode::Tdd),
    }
}

const fn sdl(band: &'static str, downlink: &'static str) -> BandDef {
    BandDef {
        band,
        uplink: None,
        downlink: Some(downlink),
        frequency: None,
        frequencies: &[],
        mode: Some(DuplexMode::Sdl),
    }
}

const fn sul(band: &'static str, uplink: &'static str) -> BandDef {
    BandDef {
        band,
        uplink: Some(uplink),
        downlink: None,
        frequency: None,
        frequencies: &[],
        mode: Some(DuplexMode::Sul),
    }
}

const fn sdo(band: &'static str, downlink: &'static str) -> BandDef {
    BandDef {
        band,
        uplink: None,
        downlink: Some(downlink),
        frequency: None,
        frequencies: &[],
        mode: Some(DuplexMode::Sdo),
    }
}

const fn single(band: &'static str, frequency: &'static str) -> BandDef {
    BandDef {
        band,
        uplink: None,
        downlink: None,
        frequency: Some(frequency),
        frequencies: &[],
        mode: None,
    }
}

const fn multi(band: &'static str, frequencies: &'static [&'static str]) -> BandDef {
    BandDef {
        band,
        uplink: None,
        downlink: None,
        frequency: None,
        frequencies,
        mode: None,
    }
}

pub const NR_BANDS: &[BandDef] = &[
    fdd("n1", "1920-1980", "2110-2170"),
    fdd("n2", "1850-1910", "1930-1990"),
    fdd("n3", "1710-1785", "1805-1880"),
    fdd("n5", "824-849", "869-894"),
    fdd("n7", "2500-2570", "2620-2690"),
    fdd("n8", "880-915", "925-960"),
    fdd("n12", "699-716", "729-746"),
    fdd("n13", "777-787", "746-756"),
    fdd("n14", "788-798", "758-768"),
    fdd("n18", "815-830", "860-875"),
    fdd("n20", "832-862", "791-821"),
    fdd("n24", "1626.5-1660.5", "1525-1559"),
    fdd("n25", "1850-1915", "1930-1995"),
    fdd("n26", "814-849", "859-894"),
    fdd("n28", "703-748", "758-803"),
    sdl("n29", "717-728"),
    fdd("n30", "2305-2315", "2350-2360"),
    fdd("n31", "452.5-457.5", "462.5-467.5"),
    tdd("n34", "2010-2025"),
    tdd("n38", "2570-2620"),
    tdd("n39", "1880-1920"),
    tdd("n40", "2300-2400"),
    tdd("n41", "2496-2690"),
    tdd("n46", "5150-5925"),
    tdd("n48", "3550-3700"),
    tdd("n50", "1432-1517"),
    tdd("n51", "1427-1432"),
    tdd("n53", "2483.5-2495"),
    tdd("n54", "1670-1675"),
    fdd("n65", "1920-2010", "2110-2200"),
    fdd("n66", "1710-1780", "2110-2200"),
    sdl("n67", "738-758"),
    fdd("n70", "1695-1710", "1995-2010"),
    fdd("n71", "663-698", "617-652"),
    fdd("n72", "451-456", "461-466"),
    fdd("n74", "1427-1470", "1475-1518"),
    sdl("n75", "1432-1517"),
    sdl("n76", "1427-1432"),
    tdd("n77", "3300-4200"),
    tdd("n78", "3300-3800"),
    tdd("n79", "4400-5000"),
    sul("n80", "1710-1785"),
    sul("n81", "880-915"),
    sul("n82", "832-862"),
    sul("n83", "703-748"),
    sul("n84", "1920-1980"),
    fdd("n85", "698-716", "728-746"),
    sul("n86", "1710-1780"),
    sul("n89", "824-849"),
    tdd("n90", "2496-2690"),
    fdd("n91", "832-862", "1427-1432"),
    fdd("n92", "832-862", "1432-1517"),
    fdd("n93", "880-915", "1427-1432"),
    fdd("n94", "880-915", "1432-1517"),
    sul("n95", "2010-2025"),
    tdd("n96", "5925-7125"),
    sul("n97", "2300-2400"),
    sul("n98", "1880-1920"),
    sul("n99", "1626.5-1660.5"),
    fdd("n100", "874.4-880", "919.4-925"),
    tdd("n101", "1900-1910"),
    tdd("n102", "5925-6425"),
    tdd("n104", "6425-7125"),
    fdd("n105", "663-703", "612-652"),
    fdd("n106", "896-901", "935-940"),
    fdd("n109", "703-733", "1432-1517"),
    // mmWave (FR2)
    tdd("n257", "26500-29500"),
    tdd("n258", "24250-27500"),
    tdd("n259", "39500-43500"),
    tdd("n260", "37000-40000"),
    tdd("n261", "27500-28350"),
    tdd("n262", "47200-48200"),
    tdd("n263", "57000-71000"),
];

pub const LTE_BANDS: &[BandDef] = &[
    fdd("b1", "1920-1980", "2110-2170"),
    fdd("b2", "1850-1910", "1930-1990"),
    fdd("b3", "1710-1785", "1805-1880"),
    fdd("b4", "1710-1755", "2110-2155"),
    fdd("b5", "824-849", "869-894"),
    fdd("b6", "830-840", "875-885"),
    fdd("b7", "2500-2570", "2620-2690"),
    fdd("b8", "880-915", "925-960"),
    fdd("b9", "1749.9-1784.9", "1844.9-1879.9"),
    fdd("b10", "1710-1770", "2110-2170"),
    fdd("b11", "1427.9-1447.9", "1475.9-1495.9"),
    fdd("b12", "699-716", "729-746"),
    fdd("b13", "777-787", "746-756"),
    fdd("b14", "788-798", "758-768"),
    fdd("b17", "704-716", "734-746"),
    fdd("b18", "815-830", "860-875"),
    fdd("b19", "830-845", "875-890"),
    fdd("b20", "832-862", "791-821"),
    fdd("b21", "1447.9-1462.9", "1495.9-1510.9"),
    fdd("b22", "3410-3490", "3510-3590"),
    fdd("b23", "2000-2020", "2180-2200"),
    fdd("b24", "1626.5-1660.5", "1525-1559"),
    fdd("b25", "1850-1915", "1930-1995"),
    fdd("b26", "814-849", "859-894"),
    fdd("b27", "807-824", "852-869"),
    fdd("b28", "703-748", "758-803"),
    sdl("b29", "717-728"),
    fdd("b30", "2305-2315", "2350-2360"),
    fdd("b31", "452.5-457.5", "462.5-467.5"),
    sdl("b32", "1452-1496"),
    tdd("b33", "1900-1920"),
    tdd("b34", "2010-2025"),
    tdd("b35", "1850-1910"),
    tdd("b36", "1930-1990"),
    tdd("b37", "1910-1930"),
    tdd("b38", "2570-2620"),
    tdd("b39", "1880-1920"),
    tdd("b40", "2300-2400"),
    tdd("b41", "2496-2690"),
    tdd("b42", "3400-3600"),
    tdd("b43", "3600-3800"),
    tdd("b44", "703-803"),
    tdd("b45", "1447-1467"),
    tdd("b46", "5150-5925"),
    tdd("b47", "5855-5925"),
    tdd("b48", "3550-3700"),
    tdd("b49", "3550-3700"),
    tdd("b50", "1432-1517"),
    tdd("b51", "1427-1432"),
    tdd("b52", "3300-3400"),
    tdd("b53", "2483.5-2495"),
    tdd("b54", "1670-1675"),
    fdd("b65", "1920-2010", "2110-2200"),
    fdd("b66", "1710-1780", "2110-2200"),
    sdl("b67", "738-758"),
    fdd("b68", "698-728", "753-783"),
    sdl("b69", "2570-2620"),
    fdd("b70", "1695-1710", "1995-2020"),
    fdd("b71", "663-698", "617-652"),
    fdd("b72", "451-456", "461-466"),
    fdd("b73", "450-455", "460-465"),
    fdd("b74", "1427-1470", "1475-1518"),
    sdl("b75", "1432-1517"),
    sdl("b76", "1427-1432"),
    fdd("b85", "698-716", "728-746"),
    fdd("b87", "410-415", "420-425"),
    fdd("b88", "412-417", "422-427"),
    fdd("b103", "787-788", "757-758"),
    sdo("b107", "612-652"),
    sdo("b108", "470-698"),
];

pub const NB_IOT_BANDS: &[BandDef] = &[
    fdd("band 1", "1920-1980", "2110-2170"),
    fdd("band 2", "1850-1910", "1930-1990"),
    fdd("band 3", "1710-1785", "1805-1880"),
    fdd("band 4", "1710-1755", "2110-2155"),
    fdd("band 5", "824-849", "869-894"),
    fdd("band 7", "2500-2570", "2620-2690"),
    fdd("band 8", "880-915", "925-960"),
    fdd("band 11", "1427.9-1447.9", "1475.9-1495.9"),
    fdd("band 12", "699-716", "729-746"),
    fdd("band 13", "777-787", "746-756"),
    fdd("band 14", "788-798", "758-768"),
    fdd("band 17", "704-716", "734-746"),
    fdd("band 18", "815-830", "860-875"),
    fdd("band 19", "830-845", "875-890"),
    fdd("band 20", "832-862", "791-821"),
    fdd("band 21", "1447.9-1462.9", "1495.9-1510.9"),
    fdd("band 24", "1626.5-1660.5", "1525-1559"),
    fdd("band 25", "1850-1915", "1930-1995"),
    fdd("band 26", "814-849", "859-894"),
    fdd("band 28", "703-748", "758-803"),
    fdd("band 31", "452.5-457.5", "462.5-467.5"),
    tdd("band 41", "2496-2690"),
    tdd("band 42", "3400-3600"),
    tdd("band 43", "3600-3800"),
    fdd("band 65", "1920-2010", "2110-2200"),
    fdd("band 66", "1710-1780", "2110-2200"),
    fdd("band 70", "1695-1710", "1995-2020"),
    fdd("band 71", "663-698", "617-652"),
    fdd("band 72", "451-456", "461-466"),
    fdd("band 73", "450-455", "460-465"),
    fdd("band 74", "1427-1470", "1475-1518"),
    fdd("band 85", "698-716", "728-746"),
    fdd("band 87", "410-415", "420-425"),
    fdd("band 88", "412-417", "422-427"),
    tdd("band 90", "2496-2690"),
    fdd("band 103", "787-788", "757-758"),
];

pub const WIFI_BANDS: &[BandDef] = &[
    single("802.11a", "5150-5875"),
    single("802.11b", "2400-2500"),
    single("802.11g", "2400-2500"),
    multi("802.11n", &["2400-2500", "5150-5875"]), // dual-band: 2.4 or 5 GHz
    single("802.11ac", "5150-5875"),
    single("802.11ad", "57000-66000"), // 60 GHz (WiGig)
    single("802.11af", "54-790"),      // TV white space
    single("802.11ah", "902-928"),     // sub-1 GHz (HaLow)
    multi("802.11ax", &["2400-2500", "5150-5875", "5925-7125"]), // Wi-Fi 6/6E
];

pub const GPS_BANDS: &[BandDef] = &[
    single("L1", "1560-1590"), // 1575.42 MHz carrier
    single("L2", "1215-1240"), // 1227.6 MHz carrier
    single("L5", "1165-1190"), // 1176.45 MHz carrier
];

pub fn band_plan(standard: Standard) -> &'static [BandDef] {
    match standard {
        Standard::Nr5g => NR_BANDS,
        Standard::Lte => LTE_BANDS,
        Standard::NbIot => NB_IOT_BANDS,
        Standard::Wifi => WIFI_BANDS,
        Standard::Gps => GPS_BANDS,
    }
}
