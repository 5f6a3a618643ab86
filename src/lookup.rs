//! Code tables.
//!
//! Human-readable descriptions for the enumerated codes carried by AIS
//! messages: ship and cargo type, EPFD (position fixing device) type and
//! aid-to-navigation type. The texts follow ITU-R M.1371.

/// Returns the description of a ship and cargo type code.
///
/// # Examples
///
/// ```
/// use ais_decode::lookup::ship_type_description;
///
/// assert_eq!(ship_type_description(37), "Pleasure Craft");
/// assert_eq!(ship_type_description(71), "Cargo, Hazardous category A");
/// ```
pub fn ship_type_description(code: u8) -> &'static str {
    match code {
        0 => "Not available",
        1..=19 => "Reserved for future use",
        20 => "Wing in ground (WIG), all ships of this type",
        21 => "Wing in ground (WIG), Hazardous category A",
        22 => "Wing in ground (WIG), Hazardous category B",
        23 => "Wing in ground (WIG), Hazardous category C",
        24 => "Wing in ground (WIG), Hazardous category D",
        25..=29 => "Wing in ground (WIG), Reserved for future use",
        30 => "Fishing",
        31 => "Towing",
        32 => "Towing: length exceeds 200m or breadth exceeds 25m",
        33 => "Dredging or underwater ops",
        34 => "Diving ops",
        35 => "Military ops",
        36 => "Sailing",
        37 => "Pleasure Craft",
        38 | 39 => "Reserved",
        40 => "High speed craft (HSC), all ships of this type",
        41 => "High speed craft (HSC), Hazardous category A",
        42 => "High speed craft (HSC), Hazardous category B",
        43 => "High speed craft (HSC), Hazardous category C",
        44 => "High speed craft (HSC), Hazardous category D",
        45..=48 => "High speed craft (HSC), Reserved for future use",
        49 => "High speed craft (HSC), No additional information",
        50 => "Pilot Vessel",
        51 => "Search and Rescue vessel",
        52 => "Tug",
        53 => "Port Tender",
        54 => "Anti-pollution equipment",
        55 => "Law Enforcement",
        56 | 57 => "Spare - Local Vessel",
        58 => "Medical Transport",
        59 => "Noncombatant ship according to RR Resolution No. 18",
        60 => "Passenger, all ships of this type",
        61 => "Passenger, Hazardous category A",
        62 => "Passenger, Hazardous category B",
        63 => "Passenger, Hazardous category C",
        64 => "Passenger, Hazardous category D",
        65..=68 => "Passenger, Reserved for future use",
        69 => "Passenger, No additional information",
        70 => "Cargo, all ships of this type",
        71 => "Cargo, Hazardous category A",
        72 => "Cargo, Hazardous category B",
        73 => "Cargo, Hazardous category C",
        74 => "Cargo, Hazardous category D",
        75..=78 => "Cargo, Reserved for future use",
        79 => "Cargo, No additional information",
        80 => "Tanker, all ships of this type",
        81 => "Tanker, Hazardous category A",
        82 => "Tanker, Hazardous category B",
        83 => "Tanker, Hazardous category C",
        84 => "Tanker, Hazardous category D",
        85..=88 => "Tanker, Reserved for future use",
        89 => "Tanker, No additional information",
        90 => "Other Type, all ships of this type",
        91 => "Other Type, Hazardous category A",
        92 => "Other Type, Hazardous category B",
        93 => "Other Type, Hazardous category C",
        94 => "Other Type, Hazardous category D",
        95..=98 => "Other Type, Reserved for future use",
        99 => "Other Type, no additional information",
        100..=199 => "Reserved for regional use",
        200..=255 => "Reserved for future use",
    }
}

/// Returns the description of an EPFD (position fixing device) type code.
pub fn epfd_description(code: u8) -> &'static str {
    match code {
        0 => "Undefined",
        1 => "GPS",
        2 => "GLONASS",
        3 => "Combined GPS/GLONASS",
        4 => "Loran-C",
        5 => "Chayka",
        6 => "Integrated navigation system",
        7 => "Surveyed",
        8 => "Galileo",
        15 => "Internal GNSS",
        _ => "Reserved",
    }
}

/// Returns the description of an aid-to-navigation type code.
pub fn aid_type_description(code: u8) -> &'static str {
    match code {
        0 => "Default, Type of Aid to Navigation not specified",
        1 => "Reference point",
        2 => "RACON (radar transponder marking a navigation hazard)",
        3 => "Fixed structure off shore, such as oil platforms, wind farms, rigs",
        4 => "Spare, Reserved for future use",
        5 => "Light, without sectors",
        6 => "Light, with sectors",
        7 => "Leading Light Front",
        8 => "Leading Light Rear",
        9 => "Beacon, Cardinal N",
        10 => "Beacon, Cardinal E",
        11 => "Beacon, Cardinal S",
        12 => "Beacon, Cardinal W",
        13 => "Beacon, Port hand",
        14 => "Beacon, Starboard hand",
        15 => "Beacon, Preferred Channel port hand",
        16 => "Beacon, Preferred Channel starboard hand",
        17 => "Beacon, Isolated danger",
        18 => "Beacon, Safe water",
        19 => "Beacon, Special mark",
        20 => "Cardinal Mark N",
        21 => "Cardinal Mark E",
        22 => "Cardinal Mark S",
        23 => "Cardinal Mark W",
        24 => "Port hand Mark",
        25 => "Starboard hand Mark",
        26 => "Preferred Channel Port hand",
        27 => "Preferred Channel Starboard hand",
        28 => "Isolated danger",
        29 => "Safe Water",
        30 => "Special Mark",
        31 => "Light Vessel / LANBY / Rigs",
        _ => "Invalid",
    }
}
