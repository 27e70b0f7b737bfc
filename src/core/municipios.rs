use crate::core::ResourceStore;
use crate::utils::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Municipality name -> department name, both trimmed. Later duplicate
/// rows overwrite earlier ones.
pub type MunicipalityMap = HashMap<String, String>;

#[derive(Debug, Deserialize)]
struct MunicipioRow {
    #[serde(rename = "MUNICIPIO")]
    municipio: String,
    #[serde(rename = "DEPARTAMENTO")]
    departamento: String,
}

pub async fn load_municipalities<S: ResourceStore>(
    store: &S,
    path: &str,
) -> Result<MunicipalityMap> {
    let data = store.read_file(path).await?;
    let mut reader = csv::Reader::from_reader(data.as_slice());

    let mut map = MunicipalityMap::new();
    for row in reader.deserialize() {
        let row: MunicipioRow = row?;
        map.insert(
            row.municipio.trim().to_string(),
            row.departamento.trim().to_string(),
        );
    }

    tracing::debug!("Loaded {} municipality rows", map.len());
    Ok(map)
}
