/// XML namespace used by the station documents
pub const STATION_NAMESPACE: &str = "https://www.w3schools.com";

/// Root-level timestamp elements
pub const DATE_ELEMENT: &str = "fecha";
pub const TIME_ELEMENT: &str = "hora";

/// Declared timestamp format (dd/mm/yyyy HH:MM)
pub const DECLARED_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DECLARED_TIME_FORMAT: &str = "%H:%M";
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Block tags
pub const BLOCK_CURRENT: &str = "actuales";
pub const BLOCK_DAILY: &str = "diarios";
pub const BLOCK_MONTHLY: &str = "mensuales";
pub const BLOCK_YEARLY: &str = "anuales";
pub const BLOCK_ASTRONOMY: &str = "astronomia";

/// Expected fields per block
pub const CURRENT_FIELDS: &[&str] = &[
    "temperatura",
    "humedad",
    "presion",
    "velocidadviento",
    "rachaviento",
    "direccionviento",
    "direccionviento_grados",
    "lluvia",
    "intensidadlluvia",
    "lluviaultimahora",
    "puntoderocio",
];

pub const DAILY_FIELDS: &[&str] = &[
    "temperaturamaxima",
    "temperaturamaximahora",
    "temperaturaminima",
    "temperaturaminimahora",
    "humedadmaxima",
    "humedadmaximahora",
    "humedadminima",
    "humedadminimahora",
    "presionmaxima",
    "presionminima",
    "rachaviento",
    "rachavientohora",
    "lluvia",
    "intensidadlluvia",
    "intensidadlluviahora",
    "puntoderociomaximo",
    "puntoderociominimo",
];

/// Monthly and yearly blocks share one layout
pub const EXTREMES_FIELDS: &[&str] = &[
    "temperaturamaxima",
    "temperaturamaximadia",
    "temperaturaminima",
    "temperaturaminimadia",
    "humedadmaxima",
    "humedadmaximadia",
    "humedadminima",
    "humedadminimadia",
    "presionmaxima",
    "presionminima",
    "rachaviento",
    "rachavientodia",
    "lluvia",
    "intensidadlluvia",
    "intensidadlluviadia",
    "puntoderociomaximo",
    "puntoderociominimo",
];

pub const ASTRONOMY_FIELDS: &[&str] = &[
    "salidasol",
    "puestasol",
    "salidaluna",
    "puestaluna",
    "faselunar",
    "porcentajeluna",
    "duraciondia",
    "edadlunar",
    "dia_noche",
    "lloviendo",
    "radiacionsolarmax",
];

/// (hour-suffixed, day-suffixed) pairs rewritten in monthly/yearly blocks
pub const HOUR_TO_DAY_FIELDS: &[(&str, &str)] = &[
    ("temperaturamaximahora", "temperaturamaximadia"),
    ("temperaturaminimahora", "temperaturaminimadia"),
    ("humedadmaximahora", "humedadmaximadia"),
    ("humedadminimahora", "humedadminimadia"),
    ("rachavientohora", "rachavientodia"),
    ("intensidadlluviahora", "intensidadlluviadia"),
];

/// Run defaults
pub const DEFAULT_SOURCE_LABEL: &str = "Proyecto Mastral";
pub const DEFAULT_OUTPUT_PATH: &str = "scripts/datos_meteorologicos.json";
pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";
pub const DEFAULT_FRESHNESS_MINUTES: i64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const JSON_INDENT: &[u8] = b"    ";

pub const USER_AGENT: &str = concat!("mastral-snapshot/", env!("CARGO_PKG_VERSION"));

/// Environment prefix for configuration overrides (MASTRAL_OUTPUT_PATH, ...)
pub const ENV_PREFIX: &str = "MASTRAL";
