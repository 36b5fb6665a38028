//! Atmospheric harvesting estimates, FAQ answers and collector sites.

use wasit_water::atmosphere::assess;
use wasit_water::sites::legend;
use wasit_water::WaterAdvisor;

fn main() {
    env_logger::init();

    println!("Harvesting estimates (10 m² collector):");
    println!("=======================================");
    for (temp, humidity) in [(28.0, 45.0), (30.0, 95.0), (35.0, 75.0), (42.0, 20.0), (28.0, 150.0)] {
        match assess(temp, humidity, 10.0) {
            Ok(a) => {
                println!(
                    "{temp:>5.1} °C {humidity:>5.1} %: dew point {:.1} °C, {:.2} L/day, {}",
                    a.dew_point, a.water_yield, a.system
                );
                if let Some(alert) = a.alert {
                    println!("    {}", alert.label());
                }
                println!("    {}", a.outlook.label());
            }
            Err(e) => println!("{temp:>5.1} °C {humidity:>5.1} %: {e} ({})", e.arabic_message()),
        }
    }
    println!();

    let advisor = WaterAdvisor::wasit();

    println!("FAQ:");
    println!("====");
    for question in advisor.config().faq.questions() {
        println!("### {question}");
        println!("{}", advisor.answer(question));
    }
    println!();

    println!("Collector sites:");
    println!("================");
    for site in advisor.ranked_sites() {
        println!(
            "{} ({:.2}, {:.2}) {} {} score {:.2}: {}",
            site.name,
            site.latitude,
            site.longitude,
            site.kind.label(),
            site.color(),
            site.score,
            site.rating().label()
        );
    }
    for (label, color) in legend() {
        println!("  {color} {label}");
    }
}
