mod classifier;

pub use classifier::CountryClassifier;
