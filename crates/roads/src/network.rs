use std::sync::Arc;

use bevy::log::warn;
use bevy::prelude::{App, Plugin, Resource};

use crate::error::RoadError;
use crate::lane_section::LaneSection;
use crate::road::{Road, RoadId};
use crate::road_set::RoadSet;

/// All roads of the loaded map, shared read-only once inserted.
#[derive(Resource, Default, Debug)]
pub struct RoadNetwork {
    roads: RoadSet,
}

impl RoadNetwork {
    /// Insert a road. A road whose id is already taken is rejected and the
    /// existing road kept.
    pub fn add_road(&mut self, road: Road) -> Result<Arc<Road>, RoadError> {
        let id = road.id();
        let road = Arc::new(road);
        if !self.roads.insert(Arc::clone(&road)) {
            warn!("Duplicate road id {}; keeping the first definition", id.0);
            return Err(RoadError::DuplicateRoad(id));
        }
        Ok(road)
    }

    pub fn road(&self, id: RoadId) -> Option<&Arc<Road>> {
        self.roads.get(id)
    }

    pub fn roads(&self) -> &RoadSet {
        &self.roads
    }

    pub fn parent_road(&self, lanesection: &LaneSection) -> Option<&Arc<Road>> {
        lanesection.parent_road(&self.roads)
    }

    /// Roads belonging to junction `junction`, in id order.
    pub fn junction_roads(&self, junction: i32) -> impl Iterator<Item = &Arc<Road>> {
        self.roads
            .iter()
            .filter(move |road| road.junction() == Some(junction))
    }
}

pub struct RoadNetworkPlugin;

impl Plugin for RoadNetworkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoadNetwork>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::{Lane, LaneType};
    use crate::ref_line::{RefLine, RoadGeometry};

    fn road(id: i32, junction: i32) -> Road {
        let ref_line = RefLine::new(20.0).with_geometry(RoadGeometry::line(0.0, 0.0, 0.0, 0.0, 20.0));
        Road::builder(RoadId(id), 20.0, Arc::new(ref_line))
            .junction(junction)
            .lanesection(
                LaneSection::new(0.0)
                    .with_lane(Lane::center(0))
                    .with_lane(Lane::with_constant_width(1, LaneType::Driving, 3.0)),
            )
            .build()
            .expect("valid road")
    }

    #[test]
    fn test_add_road_rejects_duplicate() {
        let mut network = RoadNetwork::default();
        assert!(network.add_road(road(1, -1)).is_ok());
        assert_eq!(
            network.add_road(road(1, 3)).unwrap_err(),
            RoadError::DuplicateRoad(RoadId(1))
        );
        assert_eq!(network.roads().len(), 1);
        assert_eq!(network.road(RoadId(1)).and_then(|r| r.junction()), None);
    }

    #[test]
    fn test_parent_road_and_junctions() {
        let mut network = RoadNetwork::default();
        network.add_road(road(5, 2)).unwrap();
        network.add_road(road(3, 2)).unwrap();
        network.add_road(road(4, -1)).unwrap();

        let junction: Vec<i32> = network.junction_roads(2).map(|r| r.id().0).collect();
        assert_eq!(junction, vec![3, 5]);

        let road = network.road(RoadId(4)).unwrap();
        let section = road.get_lanesection(0.0).unwrap();
        assert_eq!(network.parent_road(section).map(|r| r.id()), Some(RoadId(4)));
    }

    #[test]
    fn test_plugin_registers_network() {
        let mut app = App::new();
        app.add_plugins(RoadNetworkPlugin);
        app.world_mut()
            .resource_mut::<RoadNetwork>()
            .add_road(road(9, -1))
            .unwrap();
        assert!(app.world().resource::<RoadNetwork>().road(RoadId(9)).is_some());
    }
}
