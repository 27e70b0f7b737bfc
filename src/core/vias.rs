use crate::core::ResourceStore;
use crate::domain::model::RoadRecord;
use crate::utils::error::Result;
use crate::utils::text::fold;

/// Loads the road table and narrows it by the city and then the
/// user-entered filter, both as accent-folded substring tests over
/// tramo and sector. Row order is preserved.
pub async fn filter_roads<S: ResourceStore>(
    store: &S,
    path: &str,
    city: Option<&str>,
    extra_filter: &str,
) -> Result<Vec<RoadRecord>> {
    let data = store.read_file(path).await?;
    let mut reader = csv::Reader::from_reader(data.as_slice());

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RoadRecord = row?;
        // sector, tramo and estado are required; rows without them never surface
        if record.sector.trim().is_empty()
            || record.tramo.trim().is_empty()
            || record.estado.trim().is_empty()
        {
            continue;
        }
        records.push(record);
    }

    let total = records.len();

    if let Some(city) = city {
        let needle = fold(city);
        records.retain(|r| matches_segment(r, &needle));
    }

    let extra_filter = extra_filter.trim();
    if !extra_filter.is_empty() {
        let needle = fold(extra_filter);
        records.retain(|r| matches_segment(r, &needle));
    }

    tracing::debug!("Road filter kept {} of {} rows", records.len(), total);
    Ok(records)
}

fn matches_segment(record: &RoadRecord, needle: &str) -> bool {
    fold(&record.tramo).contains(needle) || fold(&record.sector).contains(needle)
}
