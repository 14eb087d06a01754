//! Yelp Fusion business search wire types.

use serde::Deserialize;

use grounds_core::defaults::UNKNOWN_ADDRESS;
use grounds_core::Cafe;

/// Response body of `GET /businesses/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct YelpSearchResponse {
    pub businesses: Vec<YelpBusiness>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One business as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct YelpBusiness {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub url: String,
    pub coordinates: YelpCoordinates,
    pub location: YelpLocation,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YelpCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YelpLocation {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl YelpBusiness {
    /// Map to a [`Cafe`]. A missing street line reads `ADDRESS UNKNOWN`; other
    /// missing address parts are empty.
    pub fn into_cafe(self) -> Cafe {
        let YelpLocation {
            address1,
            city,
            state,
            zip_code,
        } = self.location;

        Cafe {
            id: self.id,
            name: self.name,
            address1: address1.unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            zip_code: zip_code.unwrap_or_default(),
            latitude: self.coordinates.latitude,
            longitude: self.coordinates.longitude,
            rating: self.rating,
            price: self.price,
            phone: self.phone,
            image_url: self.image_url,
            yelp_url: Some(self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_deserialization_and_mapping() {
        let json = r#"{
            "id": "cartel-tempe",
            "name": "Cartel Coffee Lab",
            "rating": 4.5,
            "price": "$$",
            "phone": "+14804203000",
            "url": "https://www.yelp.com/biz/cartel-tempe",
            "image_url": "https://s3-media.yelpcdn.com/cartel.jpg",
            "coordinates": { "latitude": 33.4217, "longitude": -111.9397 },
            "location": {
                "address1": "225 W University Dr",
                "city": "Tempe",
                "state": "AZ",
                "zip_code": "85281",
                "country": "US"
            },
            "review_count": 812
        }"#;

        let business: YelpBusiness = serde_json::from_str(json).unwrap();
        let cafe = business.into_cafe();

        assert_eq!(cafe.id, "cartel-tempe");
        assert_eq!(cafe.full_address(), "225 W University Dr, Tempe, AZ 85281");
        assert_eq!(cafe.rating, Some(4.5));
        assert_eq!(cafe.price.as_deref(), Some("$$"));
        assert_eq!(
            cafe.yelp_url.as_deref(),
            Some("https://www.yelp.com/biz/cartel-tempe")
        );
        assert_eq!(cafe.latitude, 33.4217);
    }

    #[test]
    fn test_missing_location_fields_use_defaults() {
        let json = r#"{
            "id": "cart",
            "name": "Coffee Cart",
            "url": "https://www.yelp.com/biz/cart",
            "coordinates": { "latitude": 33.0, "longitude": -111.0 },
            "location": { "address1": null }
        }"#;

        let cafe = serde_json::from_str::<YelpBusiness>(json)
            .unwrap()
            .into_cafe();

        assert_eq!(cafe.address1, "ADDRESS UNKNOWN");
        assert_eq!(cafe.city, "");
        assert_eq!(cafe.state, "");
        assert_eq!(cafe.zip_code, "");
        assert!(cafe.rating.is_none());
        assert!(cafe.image_url.is_none());
    }

    #[test]
    fn test_search_response_ignores_extra_fields() {
        let json = r#"{
            "businesses": [],
            "total": 0,
            "region": { "center": { "latitude": 33.4, "longitude": -111.9 } }
        }"#;
        let response: YelpSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.businesses.is_empty());
        assert_eq!(response.total, Some(0));
    }
}
