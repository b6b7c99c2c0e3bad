use crate::histogram::Histogram;
use crate::normalize::Normalized;

pub fn print_stats(label: &str, hist: &Histogram) {
    println!("{label}");
    println!("{:20}: {}", "Pixels", hist.total());

    print_field("Darkest", hist.first_nonzero());
    print_field("Brightest", hist.last_nonzero());
    print_field("Most Frequent", hist.mode());

    if let Some(mean) = hist.mean() {
        println!("{:20}: {mean:.2}", "Mean");
    }
}

pub fn print_outcome(outcome: &Normalized) {
    match outcome {
        Normalized::Applied(bounds) => println!("{:20}: {bounds} -> [0, 255]", "Stretched"),
        Normalized::Skipped(reason) => println!("{:20}: {reason}", "Skipped"),
    }
}

fn print_field(name: &str, value: Option<u8>) {
    if let Some(v) = value {
        println!("{name:20}: {v}");
    }
}
