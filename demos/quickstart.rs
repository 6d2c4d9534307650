use areochron::{stations, ConversionService, JulianDate, MarsSolDate, TT};
use chrono::Utc;

fn main() {
    let now = Utc::now();
    let jd = JulianDate::from_utc(now);
    let tt = jd.to::<TT>();

    println!("UTC: {now}");
    println!("{jd}");
    println!("{tt}");

    match MarsSolDate::from_terrestrial(tt) {
        Ok(msd) => println!("{msd}  MTC {}", msd.coordinated_time()),
        Err(err) => eprintln!("sol date: {err}"),
    }

    let service = ConversionService::new();
    match service.station_clocks(&stations::CATALOG, now) {
        Ok(board) => {
            for clock in board {
                println!("{:20} LTST {}", clock.station.name, clock.ltst);
            }
        }
        Err(err) => eprintln!("station board: {err}"),
    }
}
