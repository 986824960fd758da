/// Implements read/write helpers for primitive little-endian types on RomView
#[macro_export]
macro_rules! romio_impl_primitive_rw {
    ($($ty:ty),+ $(,)?) => {
        $(
            paste::paste! {
                #[inline(always)]
                pub fn [<write_ $ty _at>](&mut self, offset: u64, value: $ty) -> RomIOResult {
                    let buf = value.to_le_bytes();
                    self.write_at(offset, &buf)
                }

                #[inline(always)]
                pub fn [<read_ $ty _at>](&self, offset: u64) -> RomIOResult<$ty> {
                    let mut buf = [0u8; core::mem::size_of::<$ty>()];
                    self.read_at(offset, &mut buf)?;
                    Ok(<$ty>::from_le_bytes(buf))
                }
            }
        )+
    };
}
