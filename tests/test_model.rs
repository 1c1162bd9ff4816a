mod common;

#[cfg(test)]
mod model
{
    use quip::jokes::model::Joke;

    #[test]
    fn test_deserialise()
    {
        let joke: Joke = serde_json::from_str("{\"id\":1,\"text\":\"a\"}").unwrap();

        assert_eq!(joke, Joke { id: 1, text: "a".to_string() });
    }

    #[test]
    fn test_missing_field_is_an_error()
    {
        let result: Result<Joke, _> = serde_json::from_str("{\"id\":1}");

        assert!(result.is_err());
    }

    #[test]
    fn test_display()
    {
        let joke = Joke { id: 7, text: "a horse walks into a bar".to_string() };

        assert_eq!(format!("{}", joke), "a horse walks into a bar");
    }
}
