use std::collections::HashSet;

use crate::error::{ProcessingError, Result};
use crate::models::StationConfig;

/// Built-in station registry, in publication order.
pub fn default_stations() -> Vec<StationConfig> {
    [
        ("Acequion - Torrevieja", "37.979987", "-0.688619", "http://www.datos.eltiempoentorrevieja.es/Acequion/acequion"),
        ("Patricio Perez - Torrevieja", "37.977346", "-0.684409", "http://www.datos.eltiempoentorrevieja.es/PatricioPerez/patricioperez"),
        ("Centro - Torrevieja", "37.9758601", "-0.6824636", "http://www.datos.eltiempoentorrevieja.es/Centro/centro.txt"),
        ("Aguas Nuevas - Torrevieja", "37.998341", "-0.664749", "http://www.datos.eltiempoentorrevieja.es/AguasNuevas/aguasnuevas"),
        ("La Mata - Parque", "38.0240018", "-0.6587566", "http://www.datos.eltiempoentorrevieja.es/LaMata_Parque/parquenatural.xml"),
        ("Salinas - Torrevieja", "37.978448", "-0.702041", "http://www.datos.eltiempoentorrevieja.es/Salinas/salinas1"),
        ("Los Montesinos - Montesinos", "38.021563", "0.741981", "http://www.datos.eltiempoentorrevieja.es/LosMontesinos/montesinos.xml"),
        ("Los Balcones - Lago Jardin", "37.972816", "-0.728702", "http://www.datos.eltiempoentorrevieja.es/LosBalcones/balconesjardin"),
        ("Romualdo Ballester - Torrevieja", "37.955111", "-0.717841", "http://www.datos.eltiempoentorrevieja.es/RomualdoBallester/ColegioRomualdo.xml"),
        ("IES Torrevigía - Torrevieja", "37.998659", "-0.695838", "http://www.datos.eltiempoentorrevieja.es/IESTorrevigia/iestorrevigia"),
        ("San Miguel de Salinas", "37.9872061", "-0.7673557", "http://www.datos.eltiempoentorrevieja.es/SanMiguel/sanmiguel"),
        ("Marina Salinas - Torrevieja", "37.969785", "-0.680555", "http://www.datos.eltiempoentorrevieja.es/MarinaSalinas/marinasalinas.xml"),
        ("Salinas Isla - Torrevieja", "37.991396", "-0.720184", "http://www.datos.eltiempoentorrevieja.es/Salinas_Isla/salinas2"),
        ("Colegio Salvador Ruso - Torrevieja", "37.985066", "-0.672346", "http://www.datos.eltiempoentorrevieja.es/SalvadorRuso/salvadorruso"),
        ("San Luis - Torrevieja", "38.024264", "-0.697408", "http://www.datos.eltiempoentorrevieja.es/SanLuis/sanluis.xml"),
        ("Europeos - La Mata", "38.017269", "-0.653988", "http://www.datos.eltiempoentorrevieja.es/LaMata_Europeos/europeoslamata"),
        ("El Raso - Rojales", "38.054724", "-0.696401", "http://www.datos.eltiempoentorrevieja.es/Rojales/rojales"),
        ("Playa de los Locos - Torrevieja", "37.9848708", "-0.6587313", "http://www.datos.eltiempoentorrevieja.es/LosLocos/loslocos"),
        ("Plaza Waldo Calero - Torrevieja", "37.9760295", "-0.6807944", "http://datos.eltiempoentorrevieja.es/WaldoCalero/WaldoCalero.xml"),
        ("Restaurante Nautilus - Torrevieja", "37.9468063", "-0.7049459", "http://datos.eltiempoentorrevieja.es/Nautilus/Nautilus.xml"),
    ]
    .into_iter()
    .map(|(name, latitude, longitude, url)| StationConfig::new(name, latitude, longitude, url))
    .collect()
}

/// Check every entry and reject duplicate names, since readings are keyed by name.
pub fn validate_registry(stations: &[StationConfig]) -> Result<()> {
    if stations.is_empty() {
        return Err(ProcessingError::Config(
            "station registry is empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(stations.len());
    for station in stations {
        station.check().map_err(|e| {
            ProcessingError::Config(format!("station '{}': {}", station.name, e))
        })?;
        if !seen.insert(station.name.as_str()) {
            return Err(ProcessingError::DuplicateStation(station.name.clone()));
        }
    }

    Ok(())
}
