use serde::Serialize;

use crate::db::models::School;
use crate::service::distance::haversine_km;

/// A school annotated with its distance from the caller, in kilometres.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: School,
    pub distance: f64,
}

/// Annotate every school with its distance from `(latitude, longitude)` and
/// order them nearest first. Equal distances keep their input order.
pub fn rank_by_distance(schools: Vec<School>, latitude: f64, longitude: f64) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance = haversine_km(latitude, longitude, school.latitude, school.longitude);
            RankedSchool { school, distance }
        })
        .collect();
    // stable
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: i64, latitude: f64, longitude: f64) -> School {
        School {
            id,
            name: format!("school-{id}"),
            address: format!("{id} main road"),
            latitude,
            longitude,
        }
    }

    #[test]
    fn orders_nearest_first() {
        let schools = vec![school(1, 10.0, 10.0), school(2, 0.0, 1.0), school(3, 2.0, 0.0)];
        let ranked = rank_by_distance(schools, 0.0, 0.0);
        let ids: Vec<i64> = ranked.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(ranked[0].distance, 111.19);
        assert_eq!(ranked[1].distance, 222.39);
    }

    #[test]
    fn ties_keep_source_order() {
        let schools = vec![
            school(7, 0.0, 1.0),
            school(3, 1.0, 0.0),
            school(5, 0.0, -1.0),
            school(1, 0.0, 0.0),
        ];
        let ranked = rank_by_distance(schools, 0.0, 0.0);
        let ids: Vec<i64> = ranked.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![1, 7, 3, 5]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank_by_distance(Vec::new(), 5.0, 5.0).is_empty());
    }

    #[test]
    fn serializes_columns_with_distance() {
        let ranked = rank_by_distance(vec![school(4, 0.0, 0.0)], 0.0, 0.0);
        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 4,
                "name": "school-4",
                "address": "4 main road",
                "latitude": 0.0,
                "longitude": 0.0,
                "distance": 0.0
            })
        );
    }
}
