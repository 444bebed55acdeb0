use std::fmt;
use std::str::FromStr;

/// Screen rectangle of the object being recognized, in virtual screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> i64 {
        self.left as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.top as i64 + self.height as i64
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.width, self.height)
    }
}

/// Parses `left,top,width,height`.
impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(anyhow::anyhow!(
                "expected left,top,width,height but got '{}'",
                s
            ));
        }
        Ok(Self {
            left: parts[0].parse()?,
            top: parts[1].parse()?,
            width: parts[2].parse()?,
            height: parts[3].parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_from_cli_form() {
        let region: Region = "10, -20,300,40".parse().unwrap();
        assert_eq!(region, Region::new(10, -20, 300, 40));
        assert_eq!(region.right(), 310);
        assert_eq!(region.bottom(), 20);
    }

    #[test]
    fn rejects_malformed_region() {
        assert!("1,2,3".parse::<Region>().is_err());
        assert!("a,b,c,d".parse::<Region>().is_err());
        assert!("0,0,-5,5".parse::<Region>().is_err());
    }

    #[test]
    fn zero_sized_region_is_empty() {
        assert!(Region::new(5, 5, 0, 10).is_empty());
        assert!(Region::new(5, 5, 10, 0).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }
}
