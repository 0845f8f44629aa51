/// Container the router swaps views in and out of.
pub trait ViewHost<V> {
    /// Tears down the view currently shown, if any.
    fn unmount(&mut self);

    fn mount(&mut self, view: &V);

    fn scroll_to_top(&mut self);
}
