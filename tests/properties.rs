use proptest::prelude::*;
use waffle::scanner;
use waffle::scanner::lexer::Lexer;
use waffle::scanner::token::{Span, Token};

proptest! {
    #[test]
    fn decimal_integers_parse_exactly(n in 0..=i64::MAX) {
        let source = n.to_string();
        let tokens = scanner::scan(&source).expect("scan should succeed");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].token, &Token::Integer(n));
        prop_assert_eq!(tokens[0].span, Span::new(0, source.len()));
    }

    #[test]
    fn prefixed_integers_parse_in_their_base(n in 0..=i64::MAX) {
        for source in [format!("0x{n:x}"), format!("0o{n:o}"), format!("0b{n:b}")] {
            let tokens = scanner::scan(&source).expect("scan should succeed");
            prop_assert_eq!(&tokens[0].token, &Token::Integer(n), "{}", source);
        }
    }

    #[test]
    fn identifiers_round_trip(name in "[a-zA-Z_]{1,16}") {
        let tokens = scanner::scan(&name).expect("scan should succeed");
        prop_assert_eq!(tokens.len(), 1);
        match &tokens[0].token {
            Token::Identifier(text) => prop_assert_eq!(text, &name),
            keyword => prop_assert_eq!(keyword.to_string(), name),
        }
    }

    #[test]
    fn fresh_lexers_agree(source in "[a-z0-9_ (){}:;,.+*/=<>!\n-]{0,64}") {
        let code: Vec<char> = source.chars().collect();
        let first = Lexer::new(&code).tokenize();
        let second = Lexer::new(&code).tokenize();
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind(), b.kind()),
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in "[a-z0-9_ (){}:;,.+*/=<>!\n-]{0,64}") {
        let code: Vec<char> = source.chars().collect();
        if let Ok(tokens) = Lexer::new(&code).tokenize() {
            let mut previous_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start <= token.span.end);
                prop_assert!(token.span.start >= previous_end);
                prop_assert!(token.span.end <= code.len());
                previous_end = token.span.end;
            }
        }
    }
}
