fn main() {
    /* FeedReader::read_from_path reads either a directory or a local zip file.
       You can also use Feed::from_path with the default configuration
    */
    let feed = gtfs_records::FeedReader::default()
        .read_stop_times(false)
        .read_from_path("fixtures/basic")
        .expect("impossible to read gtfs");
    feed.print_stats();

    println!("there are {} stops in the gtfs", feed.stops.len());

    let route_1 = feed.routes.first().expect("no route");
    println!("{}: {:?}", route_1, route_1);
}
