fn main() {
    // ESP-IDF environment passthrough only applies to target builds; host
    // builds (tests, fuzzing) have nothing to export.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
