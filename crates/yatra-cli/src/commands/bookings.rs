use anyhow::Result;
use std::path::PathBuf;
use yatra_core::booking::BookingRepository;
use yatra_infrastructure::TomlBookingRepository;

pub async fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let repository = match data_dir {
        Some(dir) => TomlBookingRepository::new(dir).await?,
        None => TomlBookingRepository::default_location().await?,
    };

    let rail = repository.list_rail().await?;
    let air = repository.list_air().await?;

    if rail.is_empty() && air.is_empty() {
        println!("No bookings found.");
        return Ok(());
    }

    if !rail.is_empty() {
        println!("Rail bookings ({}):", rail.len());
        for stored in &rail {
            let b = &stored.booking;
            println!(
                "  {}  {}  {} -> {}  {} ({})  {}  {} traveler(s)",
                stored.id,
                b.travel_date.format("%d-%m-%Y"),
                b.origin,
                b.destination,
                b.train_name,
                b.train_number,
                b.fare_class,
                b.travelers.len()
            );
        }
    }

    if !air.is_empty() {
        println!("Air bookings ({}):", air.len());
        for stored in &air {
            let b = &stored.booking;
            println!(
                "  {}  {}  {} -> {}  {}  {}  {} passenger(s)",
                stored.id,
                b.travel_date.format("%d-%m-%Y"),
                b.origin,
                b.destination,
                b.flight.flight_number,
                b.cabin,
                b.passengers.len()
            );
        }
    }

    Ok(())
}
