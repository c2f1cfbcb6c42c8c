use super::types::Coordinate;

#[derive(Clone, Debug, Default)]
pub struct Food {
    location: Coordinate,
}

impl Food {
    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn set_location(&mut self, location: Coordinate) {
        self.location = location;
    }
}
