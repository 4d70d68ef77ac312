/// Utility functions for catalog paths
pub struct NodeUtils;

impl NodeUtils {
    /// Append `node_name` to `path`, separated unless `path` is empty
    pub fn push_segment(path: &mut String, node_name: &str, separator: &str) {
        if !path.is_empty() {
            path.push_str(separator);
        }
        path.push_str(node_name);
    }

    /// Split a path into its non-empty segments
    pub fn split_path<'a>(path: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
        path.split(separator).filter(|segment| !segment.is_empty())
    }

    /// Split a path into (parent path, last segment). Returns `None` for an empty path.
    pub fn split_last(path: &str, separator: &str) -> Option<(String, String)> {
        let segments: Vec<&str> = Self::split_path(path, separator).collect();
        let (last, parents) = segments.split_last()?;
        Some((parents.join(separator), (*last).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_segment() {
        let mut path = String::new();
        NodeUtils::push_segment(&mut path, "sales", "/");
        assert_eq!(path, "sales");
        NodeUtils::push_segment(&mut path, "2024", "/");
        assert_eq!(path, "sales/2024");
        NodeUtils::push_segment(&mut path, "q1", "::");
        assert_eq!(path, "sales/2024::q1");
    }

    #[test]
    fn test_split_path_drops_empty_segments() {
        let segments: Vec<&str> = NodeUtils::split_path("/sales//2024/", "/").collect();
        assert_eq!(segments, vec!["sales", "2024"]);
    }

    #[test]
    fn test_split_path_keeps_inner_whitespace() {
        let segments: Vec<&str> = NodeUtils::split_path("a /b", "/").collect();
        assert_eq!(segments, vec!["a ", "b"]);
    }

    #[test]
    fn test_split_last() {
        assert_eq!(
            NodeUtils::split_last("sales/2024/orders.csv", "/"),
            Some(("sales/2024".to_string(), "orders.csv".to_string()))
        );
        assert_eq!(
            NodeUtils::split_last("sales", "/"),
            Some((String::new(), "sales".to_string()))
        );
        assert_eq!(NodeUtils::split_last("//", "/"), None);
    }
}
