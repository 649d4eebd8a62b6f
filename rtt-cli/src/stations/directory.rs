//! Static station directory.
//!
//! Major Great Britain stations with their CRS codes, in name order. This
//! is the only source of station names; the RTT API is only ever asked
//! about codes from this table.

use crate::domain::{Crs, Station};

/// Every station the tool knows about, sorted by name.
pub static STATIONS: &[Station] = &[
    Station::new("Aberdeen", "ABD"),
    Station::new("Amersham", "AMR"),
    Station::new("Arbroath", "ARB"),
    Station::new("Ashford International", "AFK"),
    Station::new("Audley End", "AUD"),
    Station::new("Aviemore", "AVM"),
    Station::new("Aylesbury", "AYS"),
    Station::new("Ayr", "AYR"),
    Station::new("Banbury", "BAN"),
    Station::new("Bangor (Gwynedd)", "BNG"),
    Station::new("Barnsley", "BNY"),
    Station::new("Barrow-in-Furness", "BIF"),
    Station::new("Basildon", "BSO"),
    Station::new("Basingstoke", "BSK"),
    Station::new("Bath Spa", "BTH"),
    Station::new("Bedford", "BDM"),
    Station::new("Berkhamsted", "BKM"),
    Station::new("Berwick-upon-Tweed", "BWK"),
    Station::new("Bicester Village", "BIV"),
    Station::new("Biggleswade", "BIW"),
    Station::new("Birmingham International", "BHI"),
    Station::new("Birmingham Moor Street", "BMO"),
    Station::new("Birmingham New Street", "BHM"),
    Station::new("Bishops Stortford", "BIS"),
    Station::new("Blackpool North", "BPN"),
    Station::new("Bletchley", "BLY"),
    Station::new("Bolton", "BON"),
    Station::new("Bournemouth", "BMH"),
    Station::new("Bradford Interchange", "BDI"),
    Station::new("Brighton", "BTN"),
    Station::new("Bristol Parkway", "BPW"),
    Station::new("Bristol Temple Meads", "BRI"),
    Station::new("Bury St Edmunds", "BSE"),
    Station::new("Cambridge", "CBG"),
    Station::new("Cambridge North", "CMB"),
    Station::new("Canterbury West", "CBW"),
    Station::new("Cardiff Central", "CDF"),
    Station::new("Carlisle", "CAR"),
    Station::new("Chatham", "CTM"),
    Station::new("Chelmsford", "CHM"),
    Station::new("Cheltenham Spa", "CNM"),
    Station::new("Chester", "CTR"),
    Station::new("Chesterfield", "CHD"),
    Station::new("Chichester", "CCH"),
    Station::new("City Thameslink", "CTK"),
    Station::new("Clacton-on-Sea", "CLT"),
    Station::new("Clapham Junction", "CLJ"),
    Station::new("Colchester", "COL"),
    Station::new("Corby", "COR"),
    Station::new("Coventry", "COV"),
    Station::new("Crawley", "CRW"),
    Station::new("Crewe", "CRE"),
    Station::new("Cromer", "CMR"),
    Station::new("Darlington", "DAR"),
    Station::new("Derby", "DBY"),
    Station::new("Didcot Parkway", "DID"),
    Station::new("Doncaster", "DON"),
    Station::new("Dorking", "DKG"),
    Station::new("Dover Priory", "DVP"),
    Station::new("Dumfries", "DMF"),
    Station::new("Dundee", "DEE"),
    Station::new("Durham", "DHM"),
    Station::new("Ealing Broadway", "EAL"),
    Station::new("East Croydon", "ECR"),
    Station::new("Eastbourne", "EBN"),
    Station::new("Edinburgh", "EDB"),
    Station::new("Elgin", "ELG"),
    Station::new("Ely", "ELY"),
    Station::new("Epsom", "EPS"),
    Station::new("Exeter St Davids", "EXD"),
    Station::new("Falkirk High", "FKK"),
    Station::new("Farringdon", "ZFD"),
    Station::new("Folkestone Central", "FKC"),
    Station::new("Fort William", "FTW"),
    Station::new("Gatwick Airport", "GTW"),
    Station::new("Glasgow Central", "GLC"),
    Station::new("Glasgow Queen Street", "GLQ"),
    Station::new("Gloucester", "GCR"),
    Station::new("Grantham", "GRA"),
    Station::new("Gravesend", "GRV"),
    Station::new("Great Yarmouth", "GYM"),
    Station::new("Guildford", "GLD"),
    Station::new("Halifax", "HFX"),
    Station::new("Harlow Town", "HWN"),
    Station::new("Harpenden", "HPD"),
    Station::new("Harrogate", "HGT"),
    Station::new("Harwich International", "HPQ"),
    Station::new("Hastings", "HGS"),
    Station::new("Hatfield", "HAT"),
    Station::new("Havant", "HAV"),
    Station::new("Haymarket", "HYM"),
    Station::new("Heathrow Terminals 2 & 3", "HXX"),
    Station::new("Hebden Bridge", "HBD"),
    Station::new("Hemel Hempstead", "HML"),
    Station::new("Henley-on-Thames", "HOT"),
    Station::new("Hereford", "HFD"),
    Station::new("High Wycombe", "HWY"),
    Station::new("Hitchin", "HIT"),
    Station::new("Holyhead", "HHD"),
    Station::new("Horsham", "HRH"),
    Station::new("Huddersfield", "HUD"),
    Station::new("Hull", "HUL"),
    Station::new("Huntingdon", "HUN"),
    Station::new("Inverness", "INV"),
    Station::new("Ipswich", "IPS"),
    Station::new("Kettering", "KET"),
    Station::new("Kilmarnock", "KMK"),
    Station::new("Kings Lynn", "KLN"),
    Station::new("Kingston", "KNG"),
    Station::new("Kirkcaldy", "KDY"),
    Station::new("Kyle of Lochalsh", "KYL"),
    Station::new("Lancaster", "LAN"),
    Station::new("Leamington Spa", "LMS"),
    Station::new("Leeds", "LDS"),
    Station::new("Leicester", "LEI"),
    Station::new("Lewes", "LWS"),
    Station::new("Lincoln", "LCN"),
    Station::new("Liverpool Lime Street", "LIV"),
    Station::new("Llandudno Junction", "LLJ"),
    Station::new("London Blackfriars", "BFR"),
    Station::new("London Bridge", "LBG"),
    Station::new("London Cannon Street", "CST"),
    Station::new("London Charing Cross", "CHX"),
    Station::new("London Euston", "EUS"),
    Station::new("London Fenchurch Street", "FST"),
    Station::new("London Kings Cross", "KGX"),
    Station::new("London Liverpool Street", "LST"),
    Station::new("London Marylebone", "MYB"),
    Station::new("London Paddington", "PAD"),
    Station::new("London St Pancras International", "STP"),
    Station::new("London Victoria", "VIC"),
    Station::new("London Waterloo", "WAT"),
    Station::new("London Waterloo East", "WAE"),
    Station::new("Loughborough", "LBO"),
    Station::new("Lowestoft", "LWT"),
    Station::new("Luton", "LUT"),
    Station::new("Luton Airport Parkway", "LTN"),
    Station::new("Maidenhead", "MAI"),
    Station::new("Mallaig", "MLG"),
    Station::new("Manchester Airport", "MIA"),
    Station::new("Manchester Piccadilly", "MAN"),
    Station::new("Manchester Victoria", "MCV"),
    Station::new("Manningtree", "MNG"),
    Station::new("Margate", "MAR"),
    Station::new("Market Harborough", "MHR"),
    Station::new("Middlesbrough", "MBR"),
    Station::new("Milton Keynes Central", "MKC"),
    Station::new("Montrose", "MTS"),
    Station::new("Moorgate", "MOG"),
    Station::new("Motherwell", "MTH"),
    Station::new("Newark North Gate", "NNG"),
    Station::new("Newcastle", "NCL"),
    Station::new("Newmarket", "NMK"),
    Station::new("Newport (South Wales)", "NWP"),
    Station::new("Newquay", "NQY"),
    Station::new("Northampton", "NMP"),
    Station::new("Norwich", "NRW"),
    Station::new("Nottingham", "NOT"),
    Station::new("Oban", "OBN"),
    Station::new("Oxenholme Lake District", "OXN"),
    Station::new("Oxford", "OXF"),
    Station::new("Oxford Parkway", "OXP"),
    Station::new("Penzance", "PNZ"),
    Station::new("Perth", "PTH"),
    Station::new("Peterborough", "PBO"),
    Station::new("Plymouth", "PLY"),
    Station::new("Portsmouth & Southsea", "PMS"),
    Station::new("Portsmouth Harbour", "PMH"),
    Station::new("Preston", "PRE"),
    Station::new("Ramsgate", "RAM"),
    Station::new("Reading", "RDG"),
    Station::new("Redhill", "RDH"),
    Station::new("Reigate", "REI"),
    Station::new("Richmond", "RMD"),
    Station::new("Romford", "RMF"),
    Station::new("Rotherham Central", "RMC"),
    Station::new("Rugby", "RUG"),
    Station::new("Salisbury", "SAL"),
    Station::new("Sandy", "SDY"),
    Station::new("Scarborough", "SCA"),
    Station::new("Settle", "SET"),
    Station::new("Sevenoaks", "SEV"),
    Station::new("Sheffield", "SHF"),
    Station::new("Shenfield", "SNF"),
    Station::new("Shrewsbury", "SHR"),
    Station::new("Skipton", "SKI"),
    Station::new("Slough", "SLO"),
    Station::new("Southampton Airport Parkway", "SOA"),
    Station::new("Southampton Central", "SOU"),
    Station::new("Southend Central", "SOC"),
    Station::new("Southend Victoria", "SOV"),
    Station::new("Southport", "SOP"),
    Station::new("St Albans City", "SAC"),
    Station::new("St Neots", "SNO"),
    Station::new("Stafford", "STA"),
    Station::new("Stansted Airport", "SSD"),
    Station::new("Stevenage", "SVG"),
    Station::new("Stirling", "STG"),
    Station::new("Stockport", "SPT"),
    Station::new("Stoke-on-Trent", "SOT"),
    Station::new("Stratford (London)", "SRA"),
    Station::new("Stratford-upon-Avon", "SAV"),
    Station::new("Sunderland", "SUN"),
    Station::new("Surbiton", "SUR"),
    Station::new("Swansea", "SWA"),
    Station::new("Swindon", "SWI"),
    Station::new("Taunton", "TAU"),
    Station::new("Thurso", "THS"),
    Station::new("Tonbridge", "TON"),
    Station::new("Torquay", "TQY"),
    Station::new("Tring", "TRI"),
    Station::new("Truro", "TRU"),
    Station::new("Twickenham", "TWI"),
    Station::new("Wakefield Westgate", "WKF"),
    Station::new("Warrington Bank Quay", "WBQ"),
    Station::new("Watford Junction", "WFJ"),
    Station::new("Wellingborough", "WEL"),
    Station::new("Welwyn Garden City", "WGC"),
    Station::new("Weymouth", "WEY"),
    Station::new("Whitby", "WTB"),
    Station::new("Wick", "WCK"),
    Station::new("Wigan North Western", "WGN"),
    Station::new("Wimbledon", "WIM"),
    Station::new("Winchester", "WIN"),
    Station::new("Windermere", "WDM"),
    Station::new("Windsor & Eton Central", "WNC"),
    Station::new("Witham", "WTM"),
    Station::new("Woking", "WOK"),
    Station::new("Wolverhampton", "WVH"),
    Station::new("Worcester Foregate Street", "WOF"),
    Station::new("Worcester Shrub Hill", "WOS"),
    Station::new("Worthing", "WRH"),
    Station::new("York", "YRK"),
];

/// Look up a station by exact CRS code, in any case.
pub fn find(code: &str) -> Option<&'static Station> {
    let crs = Crs::parse(code).ok()?;
    STATIONS.iter().find(|s| s.code == crs.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn find_known_station() {
        let station = find("PAD").unwrap();
        assert_eq!(station.name, "London Paddington");
        assert_eq!(station.code, "PAD");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("kgx").unwrap().code, "KGX");
        assert_eq!(find("Rdg").unwrap().name, "Reading");
    }

    #[test]
    fn find_unknown_station() {
        assert!(find("XYZ").is_none());
        assert!(find("").is_none());
        assert!(find("PADD").is_none());
    }

    #[test]
    fn codes_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for station in STATIONS {
            let crs = Crs::parse(station.code).unwrap();
            assert_eq!(crs.as_str(), station.code, "code not upper-case: {}", station.code);
            assert!(seen.insert(station.code), "duplicate code {}", station.code);
        }
    }

    #[test]
    fn table_is_sorted_by_name() {
        let names: Vec<String> = STATIONS.iter().map(|s| s.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
