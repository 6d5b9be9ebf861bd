//! Metazone groupings in display order.

/// One metazone partition: the metazone id matched against row paths, its
/// display name, and optional help text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetazoneGroup {
    /// Metazone id as it appears in `metazone[@type="..."]`.
    pub id: &'static str,
    /// Partition name.
    pub name: &'static str,
    /// Partition help text.
    pub help: Option<&'static str>,
}

/// Position of `metazone` in the display order.
pub fn group_index(metazone: &str) -> Option<usize> {
    METAZONE_GROUPS.iter().position(|group| group.id == metazone)
}

/// Metazone groups in the order partitions are emitted.
pub const METAZONE_GROUPS: &[MetazoneGroup] = &[
    MetazoneGroup {
        id: "Africa_Central",
        name: "Central Africa",
        help: Some("The Central Africa time zone is used by many countries in central and southern Africa."),
    },
    MetazoneGroup {
        id: "Africa_Eastern",
        name: "East Africa",
        help: Some("The East Africa time zone is used by many countries in eastern Africa."),
    },
    MetazoneGroup {
        id: "Africa_Southern",
        name: "South Africa",
        help: Some("The South Africa time zone is used in the countries of South Africa, Swaziland, and Lesotho."),
    },
    MetazoneGroup {
        id: "Africa_Western",
        name: "West Africa",
        help: Some("The West Africa time zone is used by many countries in west-central Africa."),
    },
    MetazoneGroup {
        id: "America_Eastern",
        name: "North America - Eastern",
        help: Some("The North American Eastern time zone is used in many parts of the eastern United States and Canada."),
    },
    MetazoneGroup {
        id: "America_Central",
        name: "North America - Central",
        help: Some("The North American Central time zone is used in many parts of the central United States and Canada, as well as most of Mexico."),
    },
    MetazoneGroup {
        id: "America_Mountain",
        name: "North America - Mountain",
        help: Some("The North American Mountain time zone is used in many parts of the west-central United States and Canada."),
    },
    MetazoneGroup {
        id: "America_Pacific",
        name: "North America - Pacific",
        help: Some("The North American Pacific time zone is used in many parts of the western United States, Canada, and Mexico."),
    },
    MetazoneGroup {
        id: "Alaska",
        name: "Alaska",
        help: Some("The Alaska time zone is used most parts of Alaska in the United States."),
    },
    MetazoneGroup {
        id: "Alaska_Hawaii",
        name: "Alaska-Hawaii",
        help: Some("The Alaska-Hawaii time zone was used in the states of Alaska and Hawaii in the United States until 1983."),
    },
    MetazoneGroup {
        id: "Bering",
        name: "Bering",
        help: Some("The Bering time zone was used in portions of western Alaska in the United States until 1983."),
    },
    MetazoneGroup {
        id: "Yukon",
        name: "Yukon",
        help: Some("The Yukon time zone was used in the states of Alaska and Hawaii in the United States until 1983."),
    },
    MetazoneGroup {
        id: "Atlantic",
        name: "Atlantic",
        help: Some("The Atlantic time zone is used in portions of eastern Canada, as well as in the Caribbean territories of Bermuda, Dominican Republic, Trinidad and Tobago.Daylight savings time is observed in the parts of Canada that use this time zone.When DST is not in effect, the time zone is 4 hours behind UTC (UTC-4)."),
    },
    MetazoneGroup {
        id: "Newfoundland",
        name: "Newfoundland",
        help: Some("The Newfoundland time zone is used in the province of Newfoundland in Canada."),
    },
    MetazoneGroup {
        id: "Pierre_Miquelon",
        name: "Pierre and Miquelon",
        help: Some("The Pieere and Miquelon time zone is used in the territories of St."),
    },
    MetazoneGroup {
        id: "Brasilia",
        name: "Brasilia",
        help: Some("The Brasilia time zone is the predominant time zone used in Brazil, covering the eastern portion of the country."),
    },
    MetazoneGroup {
        id: "Amazon",
        name: "Amazon",
        help: Some("The Amazon time zone is used in portions of western Brazil."),
    },
    MetazoneGroup {
        id: "Noronha",
        name: "Noronha",
        help: Some("The Noronha zone is used in some islands off the eastern coast of Brazil Daylight savings time is not currently observed in this time zone, but has been observed in some years prior to 2002.When DST is not in effect, the time zone is 2 hours behind UTC (UTC-2)."),
    },
    MetazoneGroup {
        id: "Acre",
        name: "Acre",
        help: Some("The Acre time zone was used in the state of Acre and some other parts of Brazil until 2008."),
    },
    MetazoneGroup {
        id: "Argentina",
        name: "Argentina",
        help: Some("The Argentina time zone is used in most parts of Argentina."),
    },
    MetazoneGroup {
        id: "Argentina_Western",
        name: "Western Argentina",
        help: Some("The western Argentina time zone is used in small portions of western Argentina."),
    },
    MetazoneGroup {
        id: "Bolivia",
        name: "Bolivia",
        help: Some("The Bolivia time zone is used in the country of Bolivia only."),
    },
    MetazoneGroup {
        id: "Chile",
        name: "Chile",
        help: Some("The Chile time zone is used in most portions of the mainland of Chile."),
    },
    MetazoneGroup {
        id: "Colombia",
        name: "Colombia",
        help: Some("The Colombia time zone is used in the country of Colombia only."),
    },
    MetazoneGroup {
        id: "Cuba",
        name: "Cuba",
        help: Some("The Cuba time zone is used in the country of Cuba only."),
    },
    MetazoneGroup {
        id: "Dutch_Guiana",
        name: "Dutch Guiana",
        help: Some("The Dutch Guiana time zone was used in the country of Suriname until 1975."),
    },
    MetazoneGroup {
        id: "Ecuador",
        name: "Ecuador",
        help: Some("The Ecuador time zone is used in the mainland portions Ecuador only (not the Galapagos Islands)."),
    },
    MetazoneGroup {
        id: "French_Guiana",
        name: "French Guiana",
        help: Some("The French Guiana time zone is used only in the territory of French Guiana in South America."),
    },
    MetazoneGroup {
        id: "Greenland_Eastern",
        name: "Eastern Greenland",
        help: Some("The Eastern Greenland time zone is used in a small portion of Greenland on the eastern coast."),
    },
    MetazoneGroup {
        id: "Greenland_Central",
        name: "Central Greenland",
        help: Some("The Central Greenland time zone was used in portions of Greenland until 1981."),
    },
    MetazoneGroup {
        id: "Greenland_Western",
        name: "Western Greenland",
        help: Some("The Western Greenland time zone is used vast majority of areas of Greenland."),
    },
    MetazoneGroup {
        id: "Guyana",
        name: "Guyana",
        help: Some("The Guyana time zone is used in the country of Guyana only."),
    },
    MetazoneGroup {
        id: "Paraguay",
        name: "Paraguay",
        help: Some("The Paraguay time zone is used in the country of Paraguay only."),
    },
    MetazoneGroup {
        id: "Peru",
        name: "Peru",
        help: Some("The Peru time zone is used in the country of Peru only."),
    },
    MetazoneGroup {
        id: "Suriname",
        name: "Suriname",
        help: Some("The Suriname time zone is used in the country of Suriname in South America."),
    },
    MetazoneGroup {
        id: "Uruguay",
        name: "Uruguay",
        help: Some("The Uruguay time zone is used in the country of Uruguay only."),
    },
    MetazoneGroup {
        id: "Venezuela",
        name: "Venezuela",
        help: Some("The Venezuela time zone is used in the country of Venezuela only."),
    },
    MetazoneGroup {
        id: "Casey",
        name: "Casey",
        help: Some("The Casey time zone is used by the Casey station in Antarctica."),
    },
    MetazoneGroup {
        id: "Davis",
        name: "Davis",
        help: Some("The Davis time zone is used by the Davis station in Antarctica."),
    },
    MetazoneGroup {
        id: "DumontDUrville",
        name: "Dumont d'Urville",
        help: Some("The Dumont d'Urville time zone is used by the Dumont d'Urville station in Antarctica."),
    },
    MetazoneGroup {
        id: "Macquarie",
        name: "Macquarie",
        help: Some("The Macquarie time zone was used on Macquarie Island during portions of the year 2010."),
    },
    MetazoneGroup {
        id: "Mawson",
        name: "Mawson",
        help: Some("The Mawson time zone is used by the Mawson station in Antarctica."),
    },
    MetazoneGroup {
        id: "Rothera",
        name: "Rothera",
        help: Some("The Rothera time zone is used by the Rothera station in Antarctica."),
    },
    MetazoneGroup {
        id: "Syowa",
        name: "Syowa",
        help: Some("The Syowa time zone is used by the Syowa station in Antarctica."),
    },
    MetazoneGroup {
        id: "Vostok",
        name: "Vostok",
        help: Some("The Vostok time zone is used by the Vostok station in Antarctica."),
    },
    MetazoneGroup {
        id: "Afghanistan",
        name: "Afghanistan",
        help: Some("The Afghanistan time zone is used in the country of Afghanistan only."),
    },
    MetazoneGroup {
        id: "Aktyubinsk",
        name: "Aktyubinsk",
        help: Some("The Aktyubinsk time zone was used in some areas of Kazakhstan until 1991."),
    },
    MetazoneGroup {
        id: "Almaty",
        name: "Almaty",
        help: Some("The Almaty time zone was used in some areas of Kazakhstan until 2005."),
    },
    MetazoneGroup {
        id: "Aqtau",
        name: "Aqtau",
        help: Some("The Aqtau time zone was used in some areas of Kazakhstan until 2005."),
    },
    MetazoneGroup {
        id: "Aqtobe",
        name: "Aqtobe",
        help: Some("The Aqtobe time zone was used in some areas of Kazakhstan until 2005."),
    },
    MetazoneGroup {
        id: "Arabian",
        name: "Arabian",
        help: Some("The Arabian time zone is used in the countries of Saudi Arabia, Bahrain, Iraq, Kuwait, Qatar, and Yemen."),
    },
    MetazoneGroup {
        id: "Armenia",
        name: "Armenia",
        help: Some("The Armenia time zone is used in the country of Armenia only."),
    },
    MetazoneGroup {
        id: "Ashkhabad",
        name: "Ashkhabad",
        help: Some("The Ashkhabad time zone was used in the country of Turkmenistan until 1991."),
    },
    MetazoneGroup {
        id: "Azerbaijan",
        name: "Azerbaijan",
        help: Some("The Azerbaijan time zone is used in the country of Azerbaijan only."),
    },
    MetazoneGroup {
        id: "Baku",
        name: "Baku",
        help: Some("The Baku time zone was used in the country of Azerbaijan before its independence in 1991."),
    },
    MetazoneGroup {
        id: "Bangladesh",
        name: "Bangladesh",
        help: Some("The Bangladesh time zone is used in the country of Bangladesh only."),
    },
    MetazoneGroup {
        id: "Bhutan",
        name: "Bhutan",
        help: Some("The Bhutan time zone is used in the country of Bhutan only."),
    },
    MetazoneGroup {
        id: "Borneo",
        name: "Borneo",
        help: Some("The Borneo time zone was used in the country of Malaysia until 1982."),
    },
    MetazoneGroup {
        id: "Brunei",
        name: "Brunei",
        help: Some("The Brunei time zone is used in the country of Brunei only."),
    },
    MetazoneGroup {
        id: "Changbai",
        name: "Changbai",
        help: Some("The Changbai time zone was used in portions of China prior to 1980."),
    },
    MetazoneGroup {
        id: "China",
        name: "China",
        help: Some("The China time zone is used throughout the country of China."),
    },
    MetazoneGroup {
        id: "Choibalsan",
        name: "Choibalsan",
        help: Some("The Choibalsan time zone was used in portions of eastern Mongolia prior to 2008."),
    },
    MetazoneGroup {
        id: "Dacca",
        name: "Dacca",
        help: Some("The Dacca time zone was used in portions of Bangladesh prior to 1971."),
    },
    MetazoneGroup {
        id: "Dushanbe",
        name: "Dushanbe",
        help: None,
    },
    MetazoneGroup {
        id: "East_Timor",
        name: "East Timor",
        help: None,
    },
    MetazoneGroup {
        id: "Frunze",
        name: "Frunze",
        help: None,
    },
    MetazoneGroup {
        id: "Georgia",
        name: "Georgia",
        help: None,
    },
    MetazoneGroup {
        id: "Gulf",
        name: "Gulf",
        help: None,
    },
    MetazoneGroup {
        id: "Hong_Kong",
        name: "Hong Kong",
        help: None,
    },
    MetazoneGroup {
        id: "Hovd",
        name: "Hovd",
        help: None,
    },
    MetazoneGroup {
        id: "India",
        name: "India",
        help: None,
    },
    MetazoneGroup {
        id: "Indochina",
        name: "Indochina",
        help: None,
    },
    MetazoneGroup {
        id: "Indonesia_Central",
        name: "Central Indonesia",
        help: None,
    },
    MetazoneGroup {
        id: "Indonesia_Eastern",
        name: "Eastern Indonesia",
        help: None,
    },
    MetazoneGroup {
        id: "Indonesia_Western",
        name: "Western Indonesia",
        help: None,
    },
    MetazoneGroup {
        id: "Iran",
        name: "Iran",
        help: None,
    },
    MetazoneGroup {
        id: "Irkutsk",
        name: "Irkutsk",
        help: None,
    },
    MetazoneGroup {
        id: "Israel",
        name: "Israel",
        help: None,
    },
    MetazoneGroup {
        id: "Japan",
        name: "Japan",
        help: None,
    },
    MetazoneGroup {
        id: "Karachi",
        name: "Karachi",
        help: None,
    },
    MetazoneGroup {
        id: "Kashgar",
        name: "Kashgar",
        help: None,
    },
    MetazoneGroup {
        id: "Kazakhstan_Eastern",
        name: "Eastern Kazakhstan",
        help: None,
    },
    MetazoneGroup {
        id: "Kazakhstan_Western",
        name: "Western Kazakhstan",
        help: None,
    },
    MetazoneGroup {
        id: "Kizilorda",
        name: "Kizilorda",
        help: None,
    },
    MetazoneGroup {
        id: "Korea",
        name: "Korea",
        help: None,
    },
    MetazoneGroup {
        id: "Krasnoyarsk",
        name: "Krasnoyarsk",
        help: None,
    },
    MetazoneGroup {
        id: "Kyrgystan",
        name: "Kyrgystan",
        help: None,
    },
    MetazoneGroup {
        id: "Lanka",
        name: "Lanka",
        help: None,
    },
    MetazoneGroup {
        id: "Long_Shu",
        name: "Long Shu",
        help: None,
    },
    MetazoneGroup {
        id: "Macau",
        name: "Macau",
        help: None,
    },
    MetazoneGroup {
        id: "Magadan",
        name: "Magadan",
        help: None,
    },
    MetazoneGroup {
        id: "Malaya",
        name: "Malaya",
        help: None,
    },
    MetazoneGroup {
        id: "Malaysia",
        name: "Malaysia",
        help: None,
    },
    MetazoneGroup {
        id: "Mongolia",
        name: "Mongolia",
        help: None,
    },
    MetazoneGroup {
        id: "Myanmar",
        name: "Myanmar",
        help: None,
    },
    MetazoneGroup {
        id: "Nepal",
        name: "Nepal",
        help: None,
    },
    MetazoneGroup {
        id: "Novosibirsk",
        name: "Novosibirsk",
        help: None,
    },
    MetazoneGroup {
        id: "Omsk",
        name: "Omsk",
        help: None,
    },
    MetazoneGroup {
        id: "Pakistan",
        name: "Pakistan",
        help: None,
    },
    MetazoneGroup {
        id: "Philippines",
        name: "Philippines",
        help: None,
    },
    MetazoneGroup {
        id: "Qyzylorda",
        name: "Qyzylorda",
        help: None,
    },
    MetazoneGroup {
        id: "Sakhalin",
        name: "Sakhalin",
        help: None,
    },
    MetazoneGroup {
        id: "Samarkand",
        name: "Samarkand",
        help: None,
    },
    MetazoneGroup {
        id: "Shevchenko",
        name: "Shevchenko",
        help: None,
    },
    MetazoneGroup {
        id: "Singapore",
        name: "Singapore",
        help: None,
    },
    MetazoneGroup {
        id: "Sverdlovsk",
        name: "Sverdlovsk",
        help: None,
    },
    MetazoneGroup {
        id: "Taipei",
        name: "Taipei",
        help: None,
    },
    MetazoneGroup {
        id: "Tajikistan",
        name: "Tajikistan",
        help: None,
    },
    MetazoneGroup {
        id: "Tashkent",
        name: "Tashkent",
        help: None,
    },
    MetazoneGroup {
        id: "Tbilisi",
        name: "Tbilisi",
        help: None,
    },
    MetazoneGroup {
        id: "Turkmenistan",
        name: "Turkmenistan",
        help: None,
    },
    MetazoneGroup {
        id: "Uralsk",
        name: "Uralsk",
        help: None,
    },
    MetazoneGroup {
        id: "Urumqi",
        name: "Urumqi",
        help: None,
    },
    MetazoneGroup {
        id: "Uzbekistan",
        name: "Uzbekistan",
        help: None,
    },
    MetazoneGroup {
        id: "Vladivostok",
        name: "Vladivostok",
        help: None,
    },
    MetazoneGroup {
        id: "Yakutsk",
        name: "Yakutsk",
        help: None,
    },
    MetazoneGroup {
        id: "Yekaterinburg",
        name: "Yekaterinburg",
        help: None,
    },
    MetazoneGroup {
        id: "Yerevan",
        name: "Yerevan",
        help: None,
    },
    MetazoneGroup {
        id: "Australia_Central",
        name: "Central Australia",
        help: None,
    },
    MetazoneGroup {
        id: "Australia_CentralWestern",
        name: "Central Western Australia",
        help: None,
    },
    MetazoneGroup {
        id: "Australia_Eastern",
        name: "Eastern Australia",
        help: None,
    },
    MetazoneGroup {
        id: "Australia_Western",
        name: "Western Australia",
        help: None,
    },
    MetazoneGroup {
        id: "Lord_Howe",
        name: "Lord Howe Island",
        help: None,
    },
    MetazoneGroup {
        id: "Europe_Central",
        name: "Central Europe",
        help: None,
    },
    MetazoneGroup {
        id: "Europe_Eastern",
        name: "Eastern Europe",
        help: None,
    },
    MetazoneGroup {
        id: "Europe_Western",
        name: "Western Europe",
        help: None,
    },
    MetazoneGroup {
        id: "Kuybyshev",
        name: "Kuybyshev",
        help: None,
    },
    MetazoneGroup {
        id: "Moscow",
        name: "Moscow",
        help: None,
    },
    MetazoneGroup {
        id: "Turkey",
        name: "Turkey",
        help: None,
    },
    MetazoneGroup {
        id: "Volgograd",
        name: "Volgograd",
        help: None,
    },
    MetazoneGroup {
        id: "Azores",
        name: "Azores",
        help: None,
    },
    MetazoneGroup {
        id: "Cape_Verde",
        name: "Cape Verde",
        help: None,
    },
    MetazoneGroup {
        id: "Falkland",
        name: "Falkland Islands",
        help: None,
    },
    MetazoneGroup {
        id: "GMT",
        name: "Greenwich Mean Time",
        help: None,
    },
    MetazoneGroup {
        id: "South_Georgia",
        name: "South Georgia",
        help: None,
    },
    MetazoneGroup {
        id: "Christmas",
        name: "Christmas Island",
        help: None,
    },
    MetazoneGroup {
        id: "Cocos",
        name: "Cocos",
        help: None,
    },
    MetazoneGroup {
        id: "French_Southern",
        name: "French Southern",
        help: None,
    },
    MetazoneGroup {
        id: "Indian_Ocean",
        name: "Indian Ocean",
        help: None,
    },
    MetazoneGroup {
        id: "Maldives",
        name: "Maldives",
        help: None,
    },
    MetazoneGroup {
        id: "Mauritius",
        name: "Mauritius",
        help: None,
    },
    MetazoneGroup {
        id: "Reunion",
        name: "Reunion",
        help: None,
    },
    MetazoneGroup {
        id: "Seychelles",
        name: "Seychelles",
        help: None,
    },
    MetazoneGroup {
        id: "Chamorro",
        name: "Chamorro",
        help: None,
    },
    MetazoneGroup {
        id: "Chatham",
        name: "Chatham",
        help: None,
    },
    MetazoneGroup {
        id: "Cook",
        name: "Cook Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Easter",
        name: "Easter Island",
        help: None,
    },
    MetazoneGroup {
        id: "Fiji",
        name: "Fiji",
        help: None,
    },
    MetazoneGroup {
        id: "Galapagos",
        name: "Galapagos",
        help: None,
    },
    MetazoneGroup {
        id: "Gambier",
        name: "Gambier",
        help: None,
    },
    MetazoneGroup {
        id: "Gilbert_Islands",
        name: "Gilbert Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Guam",
        name: "Guam",
        help: None,
    },
    MetazoneGroup {
        id: "Hawaii_Aleutian",
        name: "Hawaii-Aleutian",
        help: None,
    },
    MetazoneGroup {
        id: "Kosrae",
        name: "Kosrae",
        help: None,
    },
    MetazoneGroup {
        id: "Kwajalein",
        name: "Kwajalein",
        help: None,
    },
    MetazoneGroup {
        id: "Line_Islands",
        name: "Line Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Marquesas",
        name: "Marquesas",
        help: None,
    },
    MetazoneGroup {
        id: "Marshall_Islands",
        name: "Marshall Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Nauru",
        name: "Nauru",
        help: None,
    },
    MetazoneGroup {
        id: "New_Caledonia",
        name: "New Caledonia",
        help: None,
    },
    MetazoneGroup {
        id: "New_Zealand",
        name: "New Zealand",
        help: None,
    },
    MetazoneGroup {
        id: "Niue",
        name: "Niue",
        help: None,
    },
    MetazoneGroup {
        id: "Norfolk",
        name: "Norfolk Islands",
        help: None,
    },
    MetazoneGroup {
        id: "North_Mariana",
        name: "North Mariana Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Palau",
        name: "Palau",
        help: None,
    },
    MetazoneGroup {
        id: "Papua_New_Guinea",
        name: "Papua New Guinea",
        help: None,
    },
    MetazoneGroup {
        id: "Phoenix_Islands",
        name: "Phoenix Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Pitcairn",
        name: "Pitcairn",
        help: None,
    },
    MetazoneGroup {
        id: "Ponape",
        name: "Ponape",
        help: None,
    },
    MetazoneGroup {
        id: "Samoa",
        name: "Samoa",
        help: None,
    },
    MetazoneGroup {
        id: "Solomon",
        name: "Solomon Islands",
        help: None,
    },
    MetazoneGroup {
        id: "Tahiti",
        name: "Tahiti",
        help: None,
    },
    MetazoneGroup {
        id: "Tokelau",
        name: "Tokelau",
        help: None,
    },
    MetazoneGroup {
        id: "Tonga",
        name: "Tonga",
        help: None,
    },
    MetazoneGroup {
        id: "Truk",
        name: "Truk (Chuuk)",
        help: None,
    },
    MetazoneGroup {
        id: "Tuvalu",
        name: "Tuvalu",
        help: None,
    },
    MetazoneGroup {
        id: "Vanuatu",
        name: "Vanuatu",
        help: None,
    },
    MetazoneGroup {
        id: "Wake",
        name: "Wake Island",
        help: None,
    },
    MetazoneGroup {
        id: "Wallis",
        name: "Wallis and Futuna",
        help: None,
    },
];
