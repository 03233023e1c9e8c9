use gtfs_records::{RecordReader, Stop};

/// prints the stops of the stops.txt file given as a cli argument, and the lines that could not be read
fn main() {
    let file_path = std::env::args()
        .nth(1)
        .expect("you should put the path of the file to load");

    println!("reading file {}", &file_path);
    let content = std::fs::read_to_string(&file_path).expect("impossible to read the file");
    let reader = RecordReader::<Stop>::new(&content).expect("invalid header");

    for stop in reader {
        match stop {
            Ok(stop) => println!("stop: {}", stop),
            Err(e) => eprintln!("error: {:?}", e),
        }
    }
}
