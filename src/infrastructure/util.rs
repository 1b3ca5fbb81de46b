use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_separators() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello World!"), "hello-world");
        assert_eq!(slugger.slugify("  Spaced   out  "), "spaced-out");
    }

    #[test]
    fn non_alphanumeric_input_yields_empty_base() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("!!!"), "");
    }
}
