fn main() -> Result<(), eframe::Error> {
    driver_interface::run()
}
