//! Panorama metadata as delivered by the image tag reader.

use crate::geometry::GeoCoordinate;

/// An angle expressed as degrees, minutes and seconds.
///
/// No hemisphere sign is applied: latitudes are degrees north and
/// longitudes degrees west, exactly as read from the image tags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 3]", into = "[f64; 3]")
)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: f64,
    /// Arc minutes.
    pub minutes: f64,
    /// Arc seconds.
    pub seconds: f64,
}

impl Dms {
    /// Creates an angle from its parts.
    #[must_use]
    pub const fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Converts to decimal degrees as `d + m / 60 + s / 3600`.
    ///
    /// # Examples
    /// ```
    /// use panograph_core::Dms;
    ///
    /// let decimal = Dms::new(40.0, 30.0, 36.0).to_decimal();
    /// assert!((decimal - 40.51).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

impl From<[f64; 3]> for Dms {
    fn from([degrees, minutes, seconds]: [f64; 3]) -> Self {
        Self::new(degrees, minutes, seconds)
    }
}

impl From<Dms> for [f64; 3] {
    fn from(value: Dms) -> Self {
        [value.degrees, value.minutes, value.seconds]
    }
}

/// Identity, location and heading of one panorama.
///
/// Any tag missing from the image is `None`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanoramaMetadata {
    /// Identifier of the panorama.
    pub id: String,
    /// Latitude north.
    pub latitude: Option<Dms>,
    /// Longitude west.
    pub longitude: Option<Dms>,
    /// Compass heading at the panorama centre, expected in `[0, 359]`.
    pub heading: Option<u16>,
}

impl PanoramaMetadata {
    /// Creates a record with no location or heading.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets latitude and longitude.
    #[must_use]
    pub fn with_location(mut self, latitude: Dms, longitude: Dms) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets the heading.
    #[must_use]
    pub fn with_heading(mut self, heading: u16) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Returns the decimal location when both latitude and longitude are
    /// present.
    #[must_use]
    pub fn location(&self) -> Option<GeoCoordinate> {
        let latitude = self.latitude?.to_decimal();
        let longitude = self.longitude?.to_decimal();
        Some(GeoCoordinate::new(latitude, longitude))
    }
}
