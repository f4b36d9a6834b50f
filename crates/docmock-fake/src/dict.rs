//! Word lists used by the default synthesizer.

pub(crate) const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Margaret", "Aarav", "Priya", "Mateo", "Sofia", "Kenji", "Yuki", "Omar", "Layla", "Lukas",
    "Emma", "Noah", "Olivia",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Sharma", "Patel", "Tanaka", "Sato", "Muller",
    "Schmidt", "Rossi", "Haddad", "Novak", "Kowalski",
];

pub(crate) const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "Austin", "Seattle", "Denver", "Boston", "Portland", "Atlanta",
    "London", "Berlin", "Paris", "Madrid", "Rome", "Tokyo", "Mumbai", "Toronto", "Sydney",
    "Amsterdam", "Dublin", "Lisbon", "Prague", "Vienna", "Oslo",
];

pub(crate) const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "California", "Colorado", "Florida", "Georgia", "Illinois",
    "Indiana", "Kansas", "Maine", "Maryland", "Michigan", "Nevada", "New Jersey", "New Mexico",
    "New York", "Ohio", "Oregon", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "Wisconsin",
];

pub(crate) const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Mexico", "Brazil", "Argentina", "United Kingdom", "Ireland",
    "France", "Germany", "Spain", "Portugal", "Italy", "Netherlands", "Sweden", "Norway",
    "Poland", "India", "Japan", "South Korea", "Australia", "New Zealand", "South Africa",
    "Egypt", "Kenya", "Singapore",
];

pub(crate) const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Sunset", "River", "Church", "Mill", "Spring", "Highland", "Forest", "Meadow", "Willow",
    "Ridge",
];

pub(crate) const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Boulevard", "Lane", "Drive", "Court", "Way", "Place", "Terrace",
];

pub(crate) const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.test", "inbox.test",
];

pub(crate) const TLDS: &[&str] = &["com", "org", "net", "io", "dev", "info"];

/// Dictionary words for `String` fields without constraints.
pub(crate) const WORDS: &[&str] = &[
    "anchor", "bamboo", "canyon", "delta", "ember", "falcon", "garnet", "harbor", "island",
    "jasmine", "kernel", "lantern", "meadow", "nectar", "orbit", "pepper", "quartz", "ripple",
    "saddle", "timber", "umbra", "velvet", "willow", "xenon", "yonder", "zephyr", "apricot",
    "breeze", "cobalt", "dune", "echo", "fern", "glacier", "horizon", "ivory", "juniper",
    "kite", "lagoon", "marble", "nimbus", "onyx", "prism", "quill", "raven", "summit",
    "tundra", "upland", "vortex", "walnut", "yarrow",
];

pub(crate) const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

pub(crate) const HEX: &[u8] = b"0123456789abcdef";
pub(crate) const ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
