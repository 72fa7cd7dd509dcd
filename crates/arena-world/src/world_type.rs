#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WorldType {
    City,
    Interior,
    Wilderness,
}
