/// 64 位元整數加法，溢位時以二補數環繞
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
