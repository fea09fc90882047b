//! Reverse geocoding seam: coordinate to human-readable place name.
//!
//! The application never talks to a geocoding service directly; consumers
//! depend on the [`Geocoder`] trait and render any failure as "Unknown".
//!
//! Lookups are sequenced through [`PlaceResolver`]: every request takes a
//! numbered ticket, and only the response matching the newest ticket is
//! accepted. A concurrent caller whose earlier lookup finishes late sees its
//! response dropped instead of overwriting the newer result.

use crate::constants::UNKNOWN_PLACE;
use crate::entry::Coordinate;
use crate::errors::GeocodeError;
use tracing::debug;

/// A reverse geocoding backend.
///
/// Implementations may be remote services, local gazetteers, or test
/// doubles; the consumer only sees a place name or a failure.
pub trait Geocoder {
    /// Looks up a human-readable place name for `coordinate`.
    fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodeError>;
}

/// The stand-in geocoder used when no backend is configured: every lookup
/// fails, so every place renders as "Unknown".
pub struct UnavailableGeocoder;

impl Geocoder for UnavailableGeocoder {
    fn reverse(&self, _coordinate: Coordinate) -> Result<String, GeocodeError> {
        Err(GeocodeError::Lookup(
            "no geocoding backend configured".to_string(),
        ))
    }
}

/// Ticket identifying one lookup request. Tickets are only meaningful to the
/// resolver that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Sequences geocoding lookups so the latest request wins.
///
/// # Examples
///
/// ```
/// use waymark::entry::Coordinate;
/// use waymark::errors::GeocodeError;
/// use waymark::geocode::{Geocoder, PlaceResolver};
///
/// struct Offline;
/// impl Geocoder for Offline {
///     fn reverse(&self, _: Coordinate) -> Result<String, GeocodeError> {
///         Err(GeocodeError::Lookup("offline".to_string()))
///     }
/// }
///
/// let mut resolver = PlaceResolver::new();
/// let place = resolver.resolve(&Offline, Coordinate::new(0.0, 0.0));
/// assert_eq!(place, "Unknown");
/// ```
#[derive(Debug, Default)]
pub struct PlaceResolver {
    next_ticket: u64,
    newest: Option<u64>,
}

impl PlaceResolver {
    /// Creates a resolver with no requests in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new lookup request, superseding any earlier one.
    pub fn begin(&mut self) -> RequestTicket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.newest = Some(ticket);
        RequestTicket(ticket)
    }

    /// Delivers the outcome of the request identified by `ticket`.
    ///
    /// Returns `None` if a newer request has since been issued (the response
    /// is stale and dropped). For the newest request, returns the place name
    /// on success or "Unknown" on failure.
    pub fn accept(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<String, GeocodeError>,
    ) -> Option<String> {
        if self.newest != Some(ticket.0) {
            debug!("Dropping stale geocoding response for ticket {}", ticket.0);
            return None;
        }
        self.newest = None;

        match outcome {
            Ok(place) => Some(place),
            Err(error) => {
                debug!("Geocoding lookup failed: {}", error);
                Some(UNKNOWN_PLACE.to_string())
            }
        }
    }

    /// Runs a complete lookup against `geocoder` and returns the place name,
    /// or "Unknown" if the lookup fails.
    pub fn resolve<G: Geocoder + ?Sized>(
        &mut self,
        geocoder: &G,
        coordinate: Coordinate,
    ) -> String {
        let ticket = self.begin();
        let outcome = geocoder.reverse(coordinate);
        self.accept(ticket, outcome)
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string())
    }
}
