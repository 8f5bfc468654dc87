use logos::Logos;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[^ \t\n\r\f\{\}\(\)]+")]
    Other,
}

/// Net number of open brackets left in `buffer`.
///
/// Returns `None` when the buffer contains something the lexer cannot match,
/// in which case the caller should hand it to the parser as-is and let it
/// report the problem.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LBrace) | Ok(Token::LParen) => depth += 1,
            Ok(Token::RBrace) | Ok(Token::RParen) => depth -= 1,
            Ok(Token::Other) => {}
            Err(_) => return None,
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_balanced() {
        assert_eq!(calculate_depth("(+ 1 2)"), Some(0));
        assert_eq!(calculate_depth("def {x} {1 2}"), Some(0));
        assert_eq!(calculate_depth(""), Some(0));
    }

    #[test]
    fn test_unclosed() {
        assert_eq!(calculate_depth("(+ 1"), Some(1));
        assert_eq!(calculate_depth("eval {head (list"), Some(2));
        assert_eq!(calculate_depth("(\n{\n"), Some(2));
    }

    #[test]
    fn test_extra_closers_clamp_to_zero() {
        assert_eq!(calculate_depth("1))"), Some(0));
    }
}
