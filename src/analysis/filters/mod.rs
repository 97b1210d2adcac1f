pub mod lowercase;
pub mod reading_form;
pub mod stemmer;
pub mod stopword;
